//! Dark-mode toggle route handler.

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Theme toggle form data.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// Page to return to after toggling.
    #[serde(default)]
    pub redirect_to: String,
}

/// Flip the dark-mode preference and go back to the submitting page.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect> {
    let enabled = state.prefs().toggle_dark_mode()?;
    tracing::debug!(enabled, "dark mode toggled");

    // Only follow local paths; anything else lands on the home page.
    let target = if form.redirect_to.starts_with('/') && !form.redirect_to.starts_with("//") {
        form.redirect_to
    } else {
        "/".to_string()
    };
    Ok(Redirect::to(&target))
}
