use std::path::Path;
use std::sync::Arc;

use relief_core::error::CoreError;
use relief_core::pledge::PledgeLog;
use relief_core::seed::{parse_villages, seed_villages};
use relief_core::village::VillageRecord;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Village directory, fixed for the process lifetime.
    pub villages: Arc<Vec<VillageRecord>>,
    /// Pledges submitted since startup, in submission order.
    pub pledges: Arc<RwLock<PledgeLog>>,
}

impl AppState {
    pub fn new(config: ServerConfig, villages: Vec<VillageRecord>) -> Self {
        Self {
            config: Arc::new(config),
            villages: Arc::new(villages),
            pledges: Arc::new(RwLock::new(PledgeLog::new())),
        }
    }
}

/// Load the village directory from `path`, or the built-in seed set when
/// no path is configured.
pub fn load_villages(path: Option<&Path>) -> Result<Vec<VillageRecord>, CoreError> {
    let Some(path) = path else {
        return Ok(seed_villages());
    };
    let json = std::fs::read_to_string(path).map_err(|e| {
        CoreError::Internal(format!("Failed to read {}: {e}", path.display()))
    })?;
    parse_villages(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn no_path_yields_seed_set() {
        let villages = load_villages(None).unwrap();
        assert_eq!(villages, seed_villages());
    }

    #[test]
    fn missing_file_is_internal_error() {
        let result = load_villages(Some(Path::new("/definitely/not/here.json")));
        assert_matches!(result, Err(CoreError::Internal(_)));
    }
}
