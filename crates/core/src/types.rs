/// Catalog record identifiers are opaque strings (`"course1"`, `"user2"`).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
