use axum::routing::post;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Session routes mounted at `/session`.
///
/// ```text
/// POST   /                  -> open_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(session::open_session))
}
