/// Note primary keys are opaque UUID v4 strings stored as TEXT.
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
