use crate::backfill::constants::{FALLBACK_MONTH, SUCCESS_MARKER};
use crate::backfill::types::{StatusFilter, ViewRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// `GET /s/<token>` anywhere in the line; the capture is the message url.
/// The character class must stay ASCII-alphanumeric: the renderer quotes the
/// capture into a SQL literal without escaping.
static MESSAGE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GET /s/([a-zA-Z0-9]+)").expect("valid message url regex"));

/// Bracketed Apache timestamp prefix: `[day/month/year:H:M:S`.
static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(\d+)/(\w+)/(\d+):(\d+:\d+:\d+)").expect("valid timestamp regex")
});

/// Anchored common-log layout for strict status matching: client, identity,
/// user, bracketed timestamp, quoted request, status, size.
static STRICT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\S+) (\S+) (\S+) \[([^\]]+)\] "([^"]*)" (\d{3}) (\S+)"#)
        .expect("valid strict line regex")
});

/// Extract a view from one log line, or `None` if the line does not qualify.
///
/// A line yields a record only when all three checks pass: the status filter,
/// the share-link pattern, and the timestamp pattern. Any failure is a silent
/// skip, never an error.
pub fn parse_line(line: &str, filter: StatusFilter) -> Option<ViewRecord> {
    if !is_success(line, filter) {
        return None;
    }

    let url_cap = MESSAGE_URL.captures(line)?;
    let viewed_at = extract_timestamp(line)?;

    Some(ViewRecord {
        message_url: url_cap[1].to_string(),
        viewed_at,
    })
}

fn is_success(line: &str, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::Permissive => line.contains(SUCCESS_MARKER),
        StatusFilter::Strict => STRICT_LINE
            .captures(line)
            .is_some_and(|cap| &cap[6] == "200"),
    }
}

/// Rework the bracketed log timestamp into a SQL datetime.
///
/// The day is zero-padded to two digits; year and time text pass through
/// verbatim. No calendar validation and no timezone handling.
fn extract_timestamp(line: &str) -> Option<String> {
    let cap = TIMESTAMP.captures(line)?;
    let day = &cap[1];
    let month = month_number(&cap[2]);
    let year = &cap[3];
    let time = &cap[4];

    Some(format!("{year}-{month}-{day:0>2} {time}"))
}

/// Fixed, case-sensitive month table. Tokens outside it (including case
/// variants like `jan`) map to `FALLBACK_MONTH` rather than dropping the
/// line.
fn month_number(token: &str) -> &'static str {
    match token {
        "Jan" => "01",
        "Feb" => "02",
        "Mar" => "03",
        "Apr" => "04",
        "May" => "05",
        "Jun" => "06",
        "Jul" => "07",
        "Aug" => "08",
        "Sep" => "09",
        "Oct" => "10",
        "Nov" => "11",
        "Dec" => "12",
        _ => FALLBACK_MONTH,
    }
}
