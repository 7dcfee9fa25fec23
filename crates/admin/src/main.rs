//! Calabash Market admin panel - catalog management site.
//!
//! This binary serves the back-office admin panel on port 3001.
//!
//! # Architecture
//!
//! - Axum web framework with plain form posts and redirects
//! - Askama templates for server-side rendering
//! - Shared JSON store file for catalog, orders and preferences
//!
//! The storefront (separate binary, port 3000) sells the catalog this
//! site manages; both point at the same store file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use calabash_admin::config::AdminConfig;
use calabash_admin::routes;
use calabash_admin::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "calabash_admin=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = AdminConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();
    tracing::info!(store = %config.store_path.display(), "Using store file");

    // Build application state and router
    let state = AppState::new(config);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Admin panel listening on {addr}");

    axum::serve(listener, app).await.expect("Server error");
}
