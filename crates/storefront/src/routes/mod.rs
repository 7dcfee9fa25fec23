//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Product grid (with ?q= name search)
//! GET  /health        - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart          - Cart page with order summary and delivery form
//! POST /cart/add      - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update   - Quantity +/- (returns cart_items fragment)
//! POST /cart/remove   - Remove line (returns cart_items fragment)
//! GET  /cart/count    - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout      - Place order, clear cart, redirect to /
//!
//! # Preferences
//! POST /theme         - Toggle dark mode, redirect back
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod theme;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the storefront router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health))
        .route("/cart", get(cart::show))
        .route("/cart/add", post(cart::add))
        .route("/cart/update", post(cart::update))
        .route("/cart/remove", post(cart::remove))
        .route("/cart/count", get(cart::count))
        .route("/checkout", post(checkout::place))
        .route("/theme", post(theme::toggle))
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> StatusCode {
    StatusCode::OK
}
