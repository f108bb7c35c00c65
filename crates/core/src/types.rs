/// All primary keys (freelancers, users, pricing records) are UUIDs.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
