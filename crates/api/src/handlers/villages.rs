//! Handlers for the read-only village dashboard.
//!
//! Every endpoint requires an [`NgoSession`]. Filtering, sorting, and the
//! header counters are recomputed from the shared directory per request.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use relief_core::directory::{self, DirectoryQuery, ALL};
use relief_core::error::CoreError;
use relief_core::pledge::{DEFAULT_INTENT, PLEDGE_INTENTS};
use relief_core::stats::compute_summary_stats;
use relief_core::village::VillageStatus;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::session::NgoSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query params shared by `GET /villages` and `GET /villages/summary`.
#[derive(Debug, Default, Deserialize)]
pub struct VillageListParams {
    /// Free-text search.
    pub q: Option<String>,
    /// Exact district or `All`.
    pub district: Option<String>,
    /// Exact tehsil or `All`.
    pub tehsil: Option<String>,
    /// `All`, `High`, `Medium`, or `Low`.
    pub priority: Option<String>,
    /// `updated` (default) or `name`.
    pub sort: Option<String>,
}

impl VillageListParams {
    /// Convert raw params into a [`DirectoryQuery`], rejecting unknown
    /// priority or sort values.
    pub fn to_query(&self) -> Result<DirectoryQuery, CoreError> {
        let mut query = DirectoryQuery::default();
        if let Some(q) = &self.q {
            query.text = q.clone();
        }
        query.district = self.district.clone().unwrap_or_else(|| ALL.to_string());
        query.tehsil = self.tehsil.clone().unwrap_or_else(|| ALL.to_string());
        if let Some(priority) = &self.priority {
            query.priority = priority.parse()?;
        }
        if let Some(sort) = &self.sort {
            query.sort = sort.parse()?;
        }
        Ok(query)
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One entry of the status legend.
#[derive(Debug, Serialize)]
pub struct StatusOption {
    pub value: VillageStatus,
    pub label: &'static str,
    pub priority: &'static str,
}

/// Dropdown contents for the dashboard and pledge form.
#[derive(Debug, Serialize)]
pub struct DirectoryOptions {
    pub districts: Vec<String>,
    pub tehsils: Vec<String>,
    pub statuses: Vec<StatusOption>,
    pub intents: &'static [&'static str],
    pub default_intent: &'static str,
}

// ---------------------------------------------------------------------------
// GET /villages
// ---------------------------------------------------------------------------

/// Filtered and sorted village list. An empty list is a normal result.
pub async fn list_villages(
    session: NgoSession,
    State(state): State<AppState>,
    Query(params): Query<VillageListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.to_query()?;
    let rows = query.apply(&state.villages);

    tracing::debug!(
        email = %session.email,
        matched = rows.len(),
        total = state.villages.len(),
        "Village list computed",
    );

    Ok(Json(DataResponse { data: rows }))
}

// ---------------------------------------------------------------------------
// GET /villages/summary
// ---------------------------------------------------------------------------

/// Header counters over the villages matching the same filters as the list.
pub async fn village_summary(
    _session: NgoSession,
    State(state): State<AppState>,
    Query(params): Query<VillageListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = params.to_query()?.filter(&state.villages);
    Ok(Json(DataResponse {
        data: compute_summary_stats(&rows),
    }))
}

// ---------------------------------------------------------------------------
// GET /villages/options
// ---------------------------------------------------------------------------

pub async fn directory_options(
    _session: NgoSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let statuses = VillageStatus::ALL
        .into_iter()
        .map(|status| StatusOption {
            value: status,
            label: status.label(),
            priority: status.priority().as_str(),
        })
        .collect();

    Ok(Json(DataResponse {
        data: DirectoryOptions {
            districts: directory::district_options(&state.villages),
            tehsils: directory::tehsil_options(&state.villages),
            statuses,
            intents: PLEDGE_INTENTS,
            default_intent: DEFAULT_INTENT,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /villages/{id}
// ---------------------------------------------------------------------------

pub async fn get_village(
    _session: NgoSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let village = directory::find_village(&state.villages, &id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Village",
            id,
        }))?;

    Ok(Json(DataResponse { data: village }))
}
