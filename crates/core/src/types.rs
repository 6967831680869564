//! Shared type aliases.

use chrono::{DateTime, Utc};

/// Database identifier. All tables use BIGSERIAL primary keys.
pub type DbId = i64;

/// Timestamp type used across the domain. Stored as TIMESTAMPTZ.
pub type Timestamp = DateTime<Utc>;
