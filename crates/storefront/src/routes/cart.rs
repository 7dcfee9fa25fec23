//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. Mutations answer with fragments and an `HX-Trigger:
//! cart-updated` header so the count badge refreshes everywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use calabash_core::{ProductId, format_amount};
use calabash_store::records::{CartLine, Product};
use calabash_store::{OrderSummary, QuantityChange, total_quantity};

use crate::error::Result;
use crate::filters;
use crate::routes::checkout::CheckoutForm;
use crate::state::AppState;

/// Cart line display data for templates.
///
/// Name and price come from the live catalog record when the product
/// still exists, falling back to the line's snapshot.
#[derive(Clone)]
pub struct CartLineView {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub image: String,
}

/// Order summary display data, pre-formatted amounts.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub tax: String,
    pub delivery_fee: String,
    pub total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub count: u32,
    pub summary: SummaryView,
}

impl CartView {
    /// Build the cart view from the current collections.
    #[must_use]
    pub fn build(lines: &[CartLine], products: &[Product], currency: &str) -> Self {
        let summary = OrderSummary::compute(lines, products);
        let items = lines
            .iter()
            .map(|line| {
                let live = products.iter().find(|p| p.id == line.id);
                CartLineView {
                    id: line.id.as_i64(),
                    name: live.map_or(line.name.clone(), |p| p.name.clone()),
                    price: live.map_or_else(
                        || format!("{} {}", line.currency, line.price),
                        |p| format!("{} {}", p.currency, p.price),
                    ),
                    quantity: line.quantity,
                    image: live.map_or(line.image.clone(), |p| p.image.clone()),
                }
            })
            .collect();

        Self {
            items,
            count: total_quantity(lines),
            summary: SummaryView {
                subtotal: format_amount(summary.subtotal, currency),
                tax: format_amount(summary.tax, currency),
                delivery_fee: format_amount(summary.delivery_fee, currency),
                total: format_amount(summary.total, currency),
            },
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
}

/// Quantity +/- form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: i64,
    pub action: QuantityAction,
}

/// Direction names used by the +/- controls.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityAction {
    Increase,
    Decrease,
}

impl From<QuantityAction> for QuantityChange {
    fn from(action: QuantityAction) -> Self {
        match action {
            QuantityAction::Increase => Self::Increase,
            QuantityAction::Decrease => Self::Decrease,
        }
    }
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: u32,
    pub dark_mode: bool,
    pub form: CheckoutForm,
    pub error: Option<String>,
}

/// Cart items + summary fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Load the current cart view.
fn cart_view(state: &AppState) -> Result<CartView> {
    let lines = state.cart().lines()?;
    let products = state.catalog().list()?;
    Ok(CartView::build(
        &lines,
        &products,
        &state.config().currency,
    ))
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<CartShowTemplate> {
    let cart = cart_view(&state)?;
    let dark_mode = state.prefs().dark_mode()?;

    Ok(CartShowTemplate {
        cart_count: cart.count,
        cart,
        dark_mode,
        form: CheckoutForm::default(),
        error: None,
    })
}

/// Add one unit of a product to the cart (HTMX).
///
/// Unknown products are a silent no-op; either way the current badge
/// count comes back with a trigger to refresh other cart views.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    state.cart().add(ProductId::new(form.product_id))?;
    let count = state.cart().badge_count()?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Adjust a line's quantity (HTMX).
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    state
        .cart()
        .change_quantity(ProductId::new(form.id), form.action.into())?;
    let cart = cart_view(&state)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    state.cart().remove(ProductId::new(form.id))?;
    let cart = cart_view(&state)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Result<CartCountTemplate> {
    let count = state.cart().badge_count()?;
    Ok(CartCountTemplate { count })
}
