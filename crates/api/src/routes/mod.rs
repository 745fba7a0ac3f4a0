pub mod health;
pub mod pledges;
pub mod session;
pub mod villages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                                         open NGO session (public)
///
/// /villages                                        filtered, sorted list
/// /villages/summary                                header counters
/// /villages/options                                dropdown contents
/// /villages/{id}                                   single village
///
/// /pledges                                         list, submit
/// ```
///
/// Everything except `/session` requires a session Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Simulated NGO login.
        .nest("/session", session::router())
        // Read-only village dashboard.
        .nest("/villages", villages::router())
        // Pledge form submissions.
        .nest("/pledges", pledges::router())
}
