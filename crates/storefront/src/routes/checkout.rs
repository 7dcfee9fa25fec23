//! Checkout route handler.
//!
//! A successful checkout appends the order and clears the cart in one
//! store commit, then redirects to the landing page. Validation failures
//! re-render the cart page with a blocking message and change nothing.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use calabash_store::CheckoutError;
use calabash_store::records::Customer;

use crate::error::AppError;
use crate::routes::cart::{CartShowTemplate, CartView};
use crate::state::AppState;

/// Delivery information form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
}

impl From<CheckoutForm> for Customer {
    fn from(form: CheckoutForm) -> Self {
        Self {
            full_name: form.full_name,
            phone: form.phone,
            address: form.address,
            city: form.city,
            region: form.region,
        }
    }
}

/// Place the order.
#[instrument(skip(state, form))]
pub async fn place(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> Result<Response, AppError> {
    match state.orders().place(form.clone().into()) {
        Ok(order) => {
            tracing::info!(order_id = %order.id, "checkout complete");
            Ok(Redirect::to("/").into_response())
        }
        Err(CheckoutError::Store(e)) => Err(e.into()),
        Err(blocked @ (CheckoutError::MissingFields(_) | CheckoutError::EmptyCart)) => {
            // Re-render the cart page with the message; no state changed.
            let lines = state.cart().lines()?;
            let products = state.catalog().list()?;
            let cart = CartView::build(&lines, &products, &state.config().currency);
            let dark_mode = state.prefs().dark_mode()?;

            Ok(CartShowTemplate {
                cart_count: cart.count,
                cart,
                dark_mode,
                form,
                error: Some(blocked.to_string()),
            }
            .into_response())
        }
    }
}
