use chrono::{DateTime, Utc};

/// Record ids are opaque strings assigned by the record store.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = DateTime<Utc>;

/// Wire format for server-assigned `created_at` values (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp the way `created_at` fields are stored.
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC instant formatted with [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}
