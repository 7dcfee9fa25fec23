//! Product grid route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use calabash_store::records::{CartLine, Product};
use calabash_store::total_quantity;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub availability: String,
    pub in_stock: bool,
    pub image: String,
    /// Units of this product already in the cart, zero if none.
    pub in_cart: u32,
}

impl ProductView {
    fn build(product: &Product, cart: &[CartLine]) -> Self {
        let in_cart = cart
            .iter()
            .find(|line| line.id == product.id)
            .map_or(0, |line| line.quantity);
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: format!("{} {}", product.currency, product.price),
            availability: product.availability.label().to_string(),
            in_stock: product.availability.is_in_stock(),
            image: product.image.clone(),
            in_cart,
        }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Home page template: the product grid.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    pub query: String,
    pub cart_count: u32,
    pub dark_mode: bool,
}

/// Display the product grid, optionally filtered by name.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(search): Query<SearchQuery>,
) -> Result<HomeTemplate> {
    let query = search.q.unwrap_or_default();
    let products = state.catalog().search(&query)?;
    let cart = state.cart().lines()?;
    let dark_mode = state.prefs().dark_mode()?;

    let views = products
        .iter()
        .map(|product| ProductView::build(product, &cart))
        .collect();

    Ok(HomeTemplate {
        products: views,
        query,
        cart_count: total_quantity(&cart),
        dark_mode,
    })
}
