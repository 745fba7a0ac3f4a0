//! Village records and their relief-engagement status.
//!
//! A [`VillageRecord`] is one row of the NGO dashboard. The wire shape uses
//! camelCase field names so directory documents exported by the portal front
//! end ingest unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::VillageId;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Relief-engagement state of a village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VillageStatus {
    /// An NGO is currently active in the village.
    Working,
    /// An NGO worked here in the past but is no longer active.
    WorkedPast,
    /// No NGO has been assigned.
    None,
    /// Adopted by an NGO for long-term support.
    Adopted,
}

impl VillageStatus {
    /// All statuses in display order.
    pub const ALL: [VillageStatus; 4] = [
        VillageStatus::Working,
        VillageStatus::WorkedPast,
        VillageStatus::None,
        VillageStatus::Adopted,
    ];

    /// Wire value, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            VillageStatus::Working => "working",
            VillageStatus::WorkedPast => "worked_past",
            VillageStatus::None => "none",
            VillageStatus::Adopted => "adopted",
        }
    }

    /// Human-readable label shown on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            VillageStatus::Working => "NGO Active",
            VillageStatus::WorkedPast => "NGO Worked (Now Inactive)",
            VillageStatus::None => "No NGO Assigned",
            VillageStatus::Adopted => "Adopted (Low Priority)",
        }
    }

    /// Priority bucket this status falls into.
    pub fn priority(self) -> PriorityCategory {
        match self {
            VillageStatus::None => PriorityCategory::High,
            VillageStatus::Working | VillageStatus::WorkedPast => PriorityCategory::Medium,
            VillageStatus::Adopted => PriorityCategory::Low,
        }
    }
}

impl fmt::Display for VillageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority category
// ---------------------------------------------------------------------------

/// Derived priority grouping used by the dashboard status filter.
///
/// `All` is the "no filter" sentinel; the remaining variants are what
/// [`VillageStatus::priority`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriorityCategory {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl PriorityCategory {
    /// Whether a record with `status` belongs in this category.
    pub fn matches(self, status: VillageStatus) -> bool {
        self == PriorityCategory::All || status.priority() == self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityCategory::All => "All",
            PriorityCategory::High => "High",
            PriorityCategory::Medium => "Medium",
            PriorityCategory::Low => "Low",
        }
    }
}

impl FromStr for PriorityCategory {
    type Err = CoreError;

    /// Parse a category name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PriorityCategory::All),
            "high" => Ok(PriorityCategory::High),
            "medium" => Ok(PriorityCategory::Medium),
            "low" => Ok(PriorityCategory::Low),
            other => Err(CoreError::Validation(format!(
                "Invalid priority '{other}'. Must be one of: All, High, Medium, Low"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One flood-affected settlement and its relief status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageRecord {
    pub id: VillageId,
    pub district: String,
    pub tehsil: String,
    pub village: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officer: Option<String>,
    /// `None` means "no phone listed"; an empty string is kept as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub ngo: Vec<String>,
    pub status: VillageStatus,
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default)]
    pub work_so_far: Vec<String>,
    /// ISO calendar date (`YYYY-MM-DD`). Kept verbatim; see
    /// [`crate::directory::parse_last_updated`].
    pub last_updated: String,
}

impl VillageRecord {
    /// Every text field the free-text search looks at, in a fixed order.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.village.as_str(),
            self.tehsil.as_str(),
            self.district.as_str(),
        ]
        .into_iter()
        .chain(self.officer.as_deref())
        .chain(self.ngo.iter().map(String::as_str))
        .chain(self.needs.iter().map(String::as_str))
        .chain(self.work_so_far.iter().map(String::as_str))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
