//! Route definitions for pledges.

use axum::routing::get;
use axum::Router;

use crate::handlers::pledges;
use crate::state::AppState;

/// Pledge routes mounted at `/pledges`.
///
/// ```text
/// GET    /                  -> list_pledges
/// POST   /                  -> submit_pledge
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(pledges::list_pledges).post(pledges::submit_pledge),
    )
}
