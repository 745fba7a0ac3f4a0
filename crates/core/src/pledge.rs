//! Pledge validation and the in-memory pledge log.
//!
//! Submissions arrive as a [`PledgeDraft`] in which every field may be
//! missing. [`validate_pledge`] never fails; it answers yes or no. Accepted
//! drafts become immutable [`PledgeRequest`]s appended to a [`PledgeLog`].

use serde::{Deserialize, Serialize};

use crate::directory::find_village;
use crate::error::CoreError;
use crate::types::{Timestamp, VillageId};
use crate::village::VillageRecord;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Message shown to supporters when a required field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all required fields.";

/// Intent preselected on the pledge form.
pub const DEFAULT_INTENT: &str = "Donate Rations";

/// Suggested intents offered on the pledge form. Other values are accepted.
pub const PLEDGE_INTENTS: &[&str] = &[
    DEFAULT_INTENT,
    "Provide Clean Water Units",
    "Set up Medical Camp",
    "Sanitation / Cleanup",
    "Temporary Shelters",
    "Other",
];

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// A raw pledge submission. Nothing is guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PledgeDraft {
    pub village_id: Option<String>,
    pub supporter_name: Option<String>,
    pub contact: Option<String>,
    pub intent: Option<String>,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}

impl PledgeDraft {
    /// Build a draft from an arbitrary JSON value.
    ///
    /// Only string-valued fields are picked up; anything else (including a
    /// non-object `value`) counts as absent.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        Self {
            village_id: field("villageId"),
            supporter_name: field("supporterName"),
            contact: field("contact"),
            intent: field("intent"),
            quantity: field("quantity"),
            notes: field("notes"),
        }
    }
}

/// Returns the trimmed value when it is present and not blank.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `true` iff village id, supporter name, contact, and intent are all present
/// and non-blank after trimming.
pub fn validate_pledge(draft: &PledgeDraft) -> bool {
    [
        &draft.village_id,
        &draft.supporter_name,
        &draft.contact,
        &draft.intent,
    ]
    .into_iter()
    .all(|field| filled(field).is_some())
}

// ---------------------------------------------------------------------------
// Accepted pledge
// ---------------------------------------------------------------------------

/// A validated pledge as stored in the log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PledgeRequest {
    pub village_id: VillageId,
    pub supporter_name: String,
    pub contact: String,
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl PledgeRequest {
    /// Turn a draft into a stored pledge, trimming every field.
    ///
    /// Blank optional fields are stored as `None`.
    pub fn from_draft(draft: &PledgeDraft, created_at: Timestamp) -> Result<Self, CoreError> {
        let required = |value: &Option<String>| {
            filled(value)
                .map(str::to_string)
                .ok_or_else(|| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))
        };
        Ok(Self {
            village_id: required(&draft.village_id)?,
            supporter_name: required(&draft.supporter_name)?,
            contact: required(&draft.contact)?,
            intent: required(&draft.intent)?,
            quantity: filled(&draft.quantity).map(str::to_string),
            notes: filled(&draft.notes).map(str::to_string),
            created_at,
        })
    }
}

/// A log entry joined with the name of the village it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PledgeView {
    #[serde(flatten)]
    pub pledge: PledgeRequest,
    /// Village name, or the raw id when the village is no longer listed.
    pub village_name: String,
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// Append-only, submission-ordered pledge log.
#[derive(Debug, Clone, Default)]
pub struct PledgeLog {
    entries: Vec<PledgeRequest>,
}

impl PledgeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft` against `villages` and append it.
    ///
    /// Fails with [`CoreError::Validation`] when a required field is blank and
    /// with [`CoreError::NotFound`] when the village id is unknown. The log is
    /// untouched on failure.
    pub fn record(
        &mut self,
        draft: &PledgeDraft,
        villages: &[VillageRecord],
        now: Timestamp,
    ) -> Result<PledgeRequest, CoreError> {
        if !validate_pledge(draft) {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        let pledge = PledgeRequest::from_draft(draft, now)?;
        if find_village(villages, &pledge.village_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Village",
                id: pledge.village_id,
            });
        }
        self.entries.push(pledge.clone());
        Ok(pledge)
    }

    /// All pledges in submission order.
    pub fn entries(&self) -> &[PledgeRequest] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries joined with village names, in submission order.
    pub fn views(&self, villages: &[VillageRecord]) -> Vec<PledgeView> {
        self.entries
            .iter()
            .map(|pledge| PledgeView {
                village_name: find_village(villages, &pledge.village_id)
                    .map(|v| v.village.clone())
                    .unwrap_or_else(|| pledge.village_id.clone()),
                pledge: pledge.clone(),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
