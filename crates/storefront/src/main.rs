//! Calabash Market storefront - public shop site.
//!
//! This binary serves the public-facing storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for cart interactivity
//! - Askama templates for server-side rendering
//! - Shared JSON store file for catalog, cart, orders and preferences
//!
//! The admin panel (separate binary, port 3001) writes the catalog this
//! site reads; both point at the same store file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use calabash_storefront::config::StorefrontConfig;
use calabash_storefront::routes;
use calabash_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "calabash_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();
    tracing::info!(store = %config.store_path.display(), "Using store file");

    // Build application state and router
    let state = AppState::new(config);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Storefront listening on {addr}");

    axum::serve(listener, app).await.expect("Server error");
}
