/// All record identifiers are PostgreSQL BIGINT identity values.
pub type DbId = i64;
