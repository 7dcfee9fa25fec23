//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Dashboard (catalog stats)
//! GET  /health                  - Health check
//!
//! # Products
//! GET  /products                - Product table
//! GET  /products/new            - Create form
//! POST /products                - Create (multipart: fields + optional image upload)
//! GET  /products/{id}/edit      - Edit form
//! POST /products/{id}           - Update (multipart)
//! POST /products/{id}/delete    - Delete
//!
//! # Preferences
//! POST /theme                   - Toggle dark mode, redirect back
//! ```

pub mod dashboard;
pub mod products;
pub mod theme;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the admin router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/health", get(health))
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new))
        .route("/products/{id}/edit", get(products::edit))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/delete", post(products::delete))
        .route("/theme", post(theme::toggle))
        .nest_service("/static", ServeDir::new("crates/admin/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> StatusCode {
    StatusCode::OK
}
