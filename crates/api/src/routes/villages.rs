//! Route definitions for the village dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::villages;
use crate::state::AppState;

/// Village routes mounted at `/villages`.
///
/// ```text
/// GET    /                  -> list_villages
/// GET    /summary           -> village_summary
/// GET    /options           -> directory_options
/// GET    /{id}              -> get_village
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(villages::list_villages))
        .route("/summary", get(villages::village_summary))
        .route("/options", get(villages::directory_options))
        .route("/{id}", get(villages::get_village))
}
