//! Shared fixtures for logfill end-to-end tests.

use chrono::{DateTime, Local, TimeZone};

/// Fixed render clock so expected SQL stays byte-stable across runs.
pub fn generated_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
}

/// Common-format access log line for a share-link hit.
pub fn share_hit(client: &str, timestamp: &str, token: &str, status: u16) -> String {
    format!(r#"{client} - - [{timestamp}] "GET /s/{token} HTTP/1.1" {status} 512"#)
}
