//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use calabash_store::CatalogStats;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub stats: CatalogStats,
    pub order_count: usize,
    pub dark_mode: bool,
}

/// Display catalog stats. Recomputed from the store on every render.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<DashboardTemplate> {
    let stats = state.catalog().stats()?;
    let order_count = state.orders().list()?.len();
    let dark_mode = state.prefs().dark_mode()?;

    Ok(DashboardTemplate {
        stats,
        order_count,
        dark_mode,
    })
}
