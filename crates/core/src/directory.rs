//! Village directory filtering, sorting, and dropdown helpers.
//!
//! Everything here is a pure function over a borrowed record slice. Inputs
//! are never mutated; results are fresh vectors that keep the input's
//! relative order wherever the operation does not define another one.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;
use crate::village::{PriorityCategory, VillageRecord};

/// Sentinel accepted by the district and tehsil filters meaning "no filter".
pub const ALL: &str = "All";

// ---------------------------------------------------------------------------
// Sort key
// ---------------------------------------------------------------------------

/// Dashboard sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    Updated,
    /// Alphabetical by village name.
    Name,
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "updated" => Ok(SortKey::Updated),
            "name" => Ok(SortKey::Name),
            other => Err(CoreError::Validation(format!(
                "Invalid sort '{other}'. Must be one of: updated, name"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Keep the records matching every criterion, in their original order.
///
/// - `query` is a case-insensitive substring matched against
///   [`VillageRecord::searchable_fields`]; blank queries match everything.
/// - `district` / `tehsil` must match exactly unless they equal [`ALL`].
/// - `category` is matched through [`PriorityCategory::matches`].
pub fn filter(
    records: &[VillageRecord],
    query: &str,
    district: &str,
    tehsil: &str,
    category: PriorityCategory,
) -> Vec<VillageRecord> {
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|r| matches_text(r, &needle))
        .filter(|r| district == ALL || r.district == district)
        .filter(|r| tehsil == ALL || r.tehsil == tehsil)
        .filter(|r| category.matches(r.status))
        .cloned()
        .collect()
}

/// `needle` must already be trimmed and lowercased.
fn matches_text(record: &VillageRecord, needle: &str) -> bool {
    needle.is_empty()
        || record
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(needle))
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Return a sorted copy of `records`. Both orders are stable.
///
/// Under [`SortKey::Updated`] records whose `last_updated` cannot be parsed
/// sort after every dated record.
pub fn sort(records: &[VillageRecord], key: SortKey) -> Vec<VillageRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Updated => {
            sorted.sort_by(|a, b| {
                // Descending; `None` < `Some` so unparseable dates land last.
                parse_last_updated(&b.last_updated).cmp(&parse_last_updated(&a.last_updated))
            });
        }
        SortKey::Name => {
            sorted.sort_by(|a, b| collate(&a.village, &b.village));
        }
    }
    sorted
}

/// Parse a `lastUpdated` value.
///
/// Accepts a plain ISO date (`2025-09-14`, treated as midnight) or a full
/// RFC 3339 timestamp (normalized to UTC). Anything else yields `None`.
pub fn parse_last_updated(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Ordering for display names that ignores case and accents.
///
/// Names are compared by their base letters first (`"Éa"` sorts between
/// `"Da"` and `"Eb"`), then case-insensitively with accents, then exactly, so
/// distinct names always have a fixed order.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercase base letters with combining marks removed.
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// ---------------------------------------------------------------------------
// Query bundle
// ---------------------------------------------------------------------------

/// One complete dashboard view request: filter criteria plus sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub text: String,
    pub district: String,
    pub tehsil: String,
    pub priority: PriorityCategory,
    pub sort: SortKey,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            district: ALL.to_string(),
            tehsil: ALL.to_string(),
            priority: PriorityCategory::All,
            sort: SortKey::Updated,
        }
    }
}

impl DirectoryQuery {
    /// Filter only; the sort key is ignored.
    pub fn filter(&self, records: &[VillageRecord]) -> Vec<VillageRecord> {
        filter(records, &self.text, &self.district, &self.tehsil, self.priority)
    }

    /// Filter, then sort.
    pub fn apply(&self, records: &[VillageRecord]) -> Vec<VillageRecord> {
        sort(&self.filter(records), self.sort)
    }
}

// ---------------------------------------------------------------------------
// Lookup and dropdown helpers
// ---------------------------------------------------------------------------

/// Find a village by id.
pub fn find_village<'a>(records: &'a [VillageRecord], id: &str) -> Option<&'a VillageRecord> {
    records.iter().find(|r| r.id == id)
}

/// District dropdown contents: [`ALL`] then each distinct district in
/// first-seen order.
pub fn district_options(records: &[VillageRecord]) -> Vec<String> {
    options(records.iter().map(|r| r.district.as_str()))
}

/// Tehsil dropdown contents: [`ALL`] then each distinct tehsil in
/// first-seen order.
pub fn tehsil_options(records: &[VillageRecord]) -> Vec<String> {
    options(records.iter().map(|r| r.tehsil.as_str()))
}

fn options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for value in values {
        if !out.iter().skip(1).any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_villages;
    use crate::village::VillageStatus;
    use assert_matches::assert_matches;

    fn village(id: &str, name: &str, status: VillageStatus, last_updated: &str) -> VillageRecord {
        VillageRecord {
            id: id.to_string(),
            district: "Amritsar".to_string(),
            tehsil: "Ajanala".to_string(),
            village: name.to_string(),
            officer: None,
            phone: None,
            ngo: Vec::new(),
            status,
            needs: Vec::new(),
            work_so_far: Vec::new(),
            last_updated: last_updated.to_string(),
        }
    }

    fn names(records: &[VillageRecord]) -> Vec<&str> {
        records.iter().map(|r| r.village.as_str()).collect()
    }

    // -- filter --------------------------------------------------------------

    #[test]
    fn ngo_keyword_matches_only_that_village() {
        let rows = seed_villages();
        let result = filter(&rows, "khalsa", ALL, ALL, PriorityCategory::All);
        assert_eq!(names(&result), vec!["Saharan"]);
    }

    #[test]
    fn blank_query_matches_everything() {
        let rows = seed_villages();
        assert_eq!(filter(&rows, "", ALL, ALL, PriorityCategory::All), rows);
        assert_eq!(filter(&rows, "   ", ALL, ALL, PriorityCategory::All), rows);
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let rows = seed_villages();
        let result = filter(&rows, "  BABY food ", ALL, ALL, PriorityCategory::All);
        assert_eq!(names(&result), vec!["Dial Bhatti"]);
    }

    #[test]
    fn query_searches_officer_and_work_notes() {
        let rows = seed_villages();
        let by_officer = filter(&rows, "amarpreet", ALL, ALL, PriorityCategory::All);
        assert_eq!(names(&by_officer), vec!["Kamirpura"]);

        let by_note = filter(&rows, "tankers", ALL, ALL, PriorityCategory::All);
        assert_eq!(names(&by_note), vec!["Saharan"]);
    }

    #[test]
    fn tehsil_filter_is_exact() {
        let rows = seed_villages();
        let result = filter(&rows, "", ALL, "Ajanala", PriorityCategory::All);
        assert_eq!(names(&result), vec!["Dial Bhatti", "Kamirpura"]);

        assert!(filter(&rows, "", ALL, "ajanala", PriorityCategory::All).is_empty());
    }

    #[test]
    fn district_filter_with_no_match_is_empty() {
        let rows = seed_villages();
        assert!(filter(&rows, "", "Gurdaspur", ALL, PriorityCategory::All).is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let rows = seed_villages();
        let result = filter(&rows, "jagdeep", "Amritsar", "Ramdas", PriorityCategory::Medium);
        assert_eq!(names(&result), vec!["Ghonewala", "Saharan"]);
    }

    #[test]
    fn none_status_is_high_priority_only() {
        let rows = vec![village("v1", "Solo", VillageStatus::None, "2025-09-12")];
        assert_eq!(filter(&rows, "", ALL, ALL, PriorityCategory::High).len(), 1);
        assert!(filter(&rows, "", ALL, ALL, PriorityCategory::Medium).is_empty());
        assert!(filter(&rows, "", ALL, ALL, PriorityCategory::Low).is_empty());
    }

    #[test]
    fn filter_leaves_input_untouched() {
        let rows = seed_villages();
        let before = rows.clone();
        let _ = filter(&rows, "seeds", ALL, ALL, PriorityCategory::All);
        assert_eq!(rows, before);
    }

    // -- sort ----------------------------------------------------------------

    #[test]
    fn updated_sort_puts_newest_first() {
        let rows = seed_villages();
        let sorted = sort(&rows, SortKey::Updated);
        assert_eq!(names(&sorted), vec!["Ghonewala", "Saharan", "Dial Bhatti", "Kamirpura"]);
    }

    #[test]
    fn updated_sort_keeps_ties_in_input_order() {
        let rows = vec![
            village("a", "First", VillageStatus::None, "2025-09-12"),
            village("b", "Second", VillageStatus::None, "2025-09-12"),
            village("c", "Newer", VillageStatus::None, "2025-09-13"),
        ];
        let sorted = sort(&rows, SortKey::Updated);
        assert_eq!(names(&sorted), vec!["Newer", "First", "Second"]);
    }

    #[test]
    fn malformed_dates_sort_last() {
        let rows = vec![
            village("a", "Broken", VillageStatus::None, "not a date"),
            village("b", "Old", VillageStatus::None, "2020-01-01"),
            village("c", "Empty", VillageStatus::None, ""),
            village("d", "New", VillageStatus::None, "2025-09-14"),
        ];
        let sorted = sort(&rows, SortKey::Updated);
        assert_eq!(names(&sorted), vec!["New", "Old", "Broken", "Empty"]);
    }

    #[test]
    fn rfc3339_timestamps_are_understood() {
        let rows = vec![
            village("a", "Morning", VillageStatus::None, "2025-09-14T08:00:00Z"),
            village("b", "Evening", VillageStatus::None, "2025-09-14T20:00:00+00:00"),
        ];
        let sorted = sort(&rows, SortKey::Updated);
        assert_eq!(names(&sorted), vec!["Evening", "Morning"]);
    }

    #[test]
    fn name_sort_is_alphabetical_ignoring_case() {
        let rows = vec![
            village("a", "saharan", VillageStatus::None, "2025-09-12"),
            village("b", "Dial Bhatti", VillageStatus::None, "2025-09-12"),
            village("c", "Kamirpura", VillageStatus::None, "2025-09-12"),
        ];
        let sorted = sort(&rows, SortKey::Name);
        assert_eq!(names(&sorted), vec!["Dial Bhatti", "Kamirpura", "saharan"]);
    }

    #[test]
    fn name_sort_places_accented_names_by_base_letter() {
        let rows = vec![
            village("a", "Zz", VillageStatus::None, "2025-09-12"),
            village("b", "Eb", VillageStatus::None, "2025-09-12"),
            village("c", "Éa", VillageStatus::None, "2025-09-12"),
            village("d", "Da", VillageStatus::None, "2025-09-12"),
        ];
        let sorted = sort(&rows, SortKey::Name);
        assert_eq!(names(&sorted), vec!["Da", "Éa", "Eb", "Zz"]);
    }

    #[test]
    fn collate_orders_accent_only_differences() {
        assert_eq!(collate("Ea", "Éa"), Ordering::Less);
        assert_eq!(collate("Éa", "éa"), Ordering::Less);
        assert_eq!(collate("Éa", "Éa"), Ordering::Equal);
    }

    #[test]
    fn sort_returns_a_copy() {
        let rows = seed_villages();
        let before = rows.clone();
        let _ = sort(&rows, SortKey::Name);
        assert_eq!(rows, before);
    }

    #[test]
    fn sort_key_parses() {
        assert_eq!("Name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("updated".parse::<SortKey>().unwrap(), SortKey::Updated);
        assert_matches!("newest".parse::<SortKey>(), Err(CoreError::Validation(_)));
    }

    // -- query bundle / helpers ------------------------------------------------

    #[test]
    fn default_query_returns_everything_newest_first() {
        let rows = seed_villages();
        let view = DirectoryQuery::default().apply(&rows);
        assert_eq!(view.len(), rows.len());
        assert_eq!(view[0].village, "Ghonewala");
    }

    #[test]
    fn options_start_with_all_and_deduplicate() {
        let rows = seed_villages();
        assert_eq!(district_options(&rows), vec!["All", "Amritsar"]);
        assert_eq!(tehsil_options(&rows), vec!["All", "Ramdas", "Ajanala"]);
    }

    #[test]
    fn find_village_by_id() {
        let rows = seed_villages();
        assert_eq!(
            find_village(&rows, "amr-saharan").map(|r| r.village.as_str()),
            Some("Saharan")
        );
        assert!(find_village(&rows, "missing").is_none());
    }
}
