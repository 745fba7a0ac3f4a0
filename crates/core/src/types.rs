/// Village identifiers are stable slugs such as `amr-ghonewala`.
pub type VillageId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
