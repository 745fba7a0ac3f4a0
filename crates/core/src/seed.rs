//! Built-in village seed set and the JSON ingestion boundary.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::village::{VillageRecord, VillageStatus};

/// The four Amritsar villages the dashboard ships with.
pub fn seed_villages() -> Vec<VillageRecord> {
    vec![
        record(
            "amr-ghonewala",
            "Ramdas",
            "Ghonewala",
            "Jagdeep Singh (A.E.O)",
            "9872797553",
            &["SEEDS India"],
            VillageStatus::Working,
            &["Dry Rations", "Clean Water Units", "Medical Camp"],
            &[
                "Set up a medical triage camp on 2025-09-13",
                "Distributed 250 ration kits",
            ],
            "2025-09-14",
        ),
        record(
            "amr-saharan",
            "Ramdas",
            "Saharan",
            "Jagdeep Singh (A.E.O)",
            "9872797553",
            &["Khalsa Aid"],
            VillageStatus::WorkedPast,
            &["Chlorine Tabs", "Waste Cleanup"],
            &["Deployed water tankers (2) for 3 days"],
            "2025-09-12",
        ),
        record(
            "amr-dial-bhatti",
            "Ajanala",
            "Dial Bhatti",
            "Jagdeep Singh (A.E.O)",
            "9872797553",
            &[],
            VillageStatus::None,
            &["Baby Food", "Hygiene Kits", "Tarpaulins"],
            &[],
            "2025-09-12",
        ),
        record(
            "amr-kamirpura",
            "Ajanala",
            "Kamirpura",
            "Amarpreet Singh (A.D.O)",
            "9876856856",
            &["CARE India"],
            VillageStatus::Adopted,
            &["Follow-up Assessment"],
            &["Assessed 37 households for repairs"],
            "2025-09-11",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    tehsil: &str,
    village: &str,
    officer: &str,
    phone: &str,
    ngo: &[&str],
    status: VillageStatus,
    needs: &[&str],
    work_so_far: &[&str],
    last_updated: &str,
) -> VillageRecord {
    VillageRecord {
        id: id.to_string(),
        district: "Amritsar".to_string(),
        tehsil: tehsil.to_string(),
        village: village.to_string(),
        officer: Some(officer.to_string()),
        phone: Some(phone.to_string()),
        ngo: owned(ngo),
        status,
        needs: owned(needs),
        work_so_far: owned(work_so_far),
        last_updated: last_updated.to_string(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Decode a JSON array of village records.
///
/// Fails on malformed JSON, missing required fields, unknown status values,
/// blank ids, or duplicate ids.
pub fn parse_villages(json: &str) -> Result<Vec<VillageRecord>, CoreError> {
    let records: Vec<VillageRecord> = serde_json::from_str(json)
        .map_err(|e| CoreError::Validation(format!("Invalid village document: {e}")))?;
    validate_directory(&records)?;
    Ok(records)
}

/// Check directory-wide invariants: every id is non-blank and unique.
pub fn validate_directory(records: &[VillageRecord]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Village '{}' has a blank id",
                record.village
            )));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate village id '{}'",
                record.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn seed_ids_are_unique() {
        assert!(validate_directory(&seed_villages()).is_ok());
    }

    #[test]
    fn parse_accepts_front_end_document() {
        let json = r#"[
            {"id":"amr-kamirpura","district":"Amritsar","tehsil":"Ajanala","village":"Kamirpura",
             "officer":"Amarpreet Singh (A.D.O)","phone":"9876856856","ngo":["CARE India"],
             "status":"adopted","needs":["Follow-up Assessment"],
             "workSoFar":["Assessed 37 households for repairs"],"lastUpdated":"2025-09-11"}
        ]"#;
        let records = parse_villages(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, VillageStatus::Adopted);
        assert_eq!(records[0].work_so_far.len(), 1);
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let one = r#"{"id":"v1","district":"D","tehsil":"T","village":"V","status":"none","lastUpdated":"2025-09-12"}"#;
        let json = format!("[{one},{one}]");
        assert_matches!(parse_villages(&json), Err(CoreError::Validation(msg)) if msg.contains("Duplicate"));
    }

    #[test]
    fn parse_rejects_unknown_status() {
        let json = r#"[{"id":"v1","district":"D","tehsil":"T","village":"V","status":"lost","lastUpdated":"2025-09-12"}]"#;
        assert_matches!(parse_villages(json), Err(CoreError::Validation(_)));
    }

    #[test]
    fn parse_rejects_blank_id() {
        let json = r#"[{"id":"  ","district":"D","tehsil":"T","village":"V","status":"none","lastUpdated":"2025-09-12"}]"#;
        assert_matches!(parse_villages(json), Err(CoreError::Validation(_)));
    }
}
