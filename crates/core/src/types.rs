/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Identifier of the same game in an external catalog. Opaque to us.
pub type ExternalRefId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
