//! Dashboard header counters.
//!
//! Recomputed from the current record list on every call; the directory is
//! small enough that nothing is cached.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::village::{VillageRecord, VillageStatus};

/// Aggregate counts shown above the village table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub village_count: usize,
    /// Distinct NGO names across villages whose status is `working`.
    pub active_ngo_count: usize,
    /// Villages with no NGO assigned.
    pub high_priority_count: usize,
    /// Adopted villages.
    pub low_priority_count: usize,
}

pub fn compute_summary_stats(records: &[VillageRecord]) -> SummaryStats {
    let active_ngos: BTreeSet<&str> = records
        .iter()
        .filter(|r| r.status == VillageStatus::Working)
        .flat_map(|r| r.ngo.iter().map(String::as_str))
        .collect();

    let count_status = |status: VillageStatus| records.iter().filter(|r| r.status == status).count();

    SummaryStats {
        village_count: records.len(),
        active_ngo_count: active_ngos.len(),
        high_priority_count: count_status(VillageStatus::None),
        low_priority_count: count_status(VillageStatus::Adopted),
    }
}
