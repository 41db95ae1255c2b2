use crate::backfill::parse::parse_line;
use crate::backfill::types::{StatusFilter, ViewRecord};
use pretty_assertions::assert_eq;

/// Common-format access log line for a share-link hit.
fn share_hit(token: &str, timestamp: &str, status: u16) -> String {
    format!(r#"198.51.100.7 - - [{timestamp}] "GET /s/{token} HTTP/1.1" {status} 512"#)
}

#[test]
fn parse_share_hit_yields_record() {
    // Arrange
    let line = r#"1.2.3.4 - - [05/Jan/2024:10:20:30 +0000] "GET /s/abc123 HTTP/1.1" 200 512"#;

    // Act
    let record = parse_line(line, StatusFilter::Permissive);

    // Assert
    assert_eq!(
        record,
        Some(ViewRecord {
            message_url: "abc123".to_string(),
            viewed_at: "2024-01-05 10:20:30".to_string(),
        })
    );
}

#[test]
fn parse_skips_non_200_status() {
    // Arrange
    let line = share_hit("abc123", "05/Jan/2024:10:20:30 +0000", 404);

    // Act + Assert
    assert_eq!(parse_line(&line, StatusFilter::Permissive), None);
}

#[test]
fn parse_skips_request_outside_share_prefix() {
    // Arrange
    let line = r#"1.2.3.4 - - [05/Jan/2024:10:20:30 +0000] "GET /other/xyz HTTP/1.1" 200 512"#;

    // Act + Assert
    assert_eq!(parse_line(line, StatusFilter::Permissive), None);
}

#[test]
fn parse_skips_line_without_timestamp() {
    // Arrange
    let line = r#"1.2.3.4 - - "GET /s/abc123 HTTP/1.1" 200 512"#;

    // Act + Assert
    assert_eq!(parse_line(line, StatusFilter::Permissive), None);
}

#[test]
fn unknown_month_renders_as_january() {
    // Arrange
    let line = share_hit("abc123", "05/Xyz/2024:10:20:30 +0000", 200);

    // Act
    let record = parse_line(&line, StatusFilter::Permissive).unwrap();

    // Assert
    assert_eq!(record.viewed_at, "2024-01-05 10:20:30");
}

#[test]
fn month_table_is_case_sensitive() {
    // Arrange: `jan` is not in the table, so it falls back like any
    // unknown token.
    let line = share_hit("abc123", "05/jan/2024:10:20:30 +0000", 200);

    // Act
    let record = parse_line(&line, StatusFilter::Permissive).unwrap();

    // Assert
    assert_eq!(record.viewed_at, "2024-01-05 10:20:30");
}

#[test]
fn single_digit_day_is_zero_padded() {
    // Arrange
    let line = share_hit("abc123", "5/Feb/2024:01:02:03 +0000", 200);

    // Act
    let record = parse_line(&line, StatusFilter::Permissive).unwrap();

    // Assert
    assert_eq!(record.viewed_at, "2024-02-05 01:02:03");
}

#[test]
fn token_stops_at_first_non_alphanumeric() {
    // The capture must never pick up characters that could break out of the
    // quoted SQL literal.
    let line = share_hit("abc-def';--", "05/Mar/2024:10:20:30 +0000", 200);

    let record = parse_line(&line, StatusFilter::Permissive).unwrap();

    assert_eq!(record.message_url, "abc");
}

#[test]
fn extracted_fields_stay_in_safe_character_classes() {
    // Arrange
    let lines = [
        share_hit("Zz9", "1/Jan/2024:00:00:00 +0000", 200),
        share_hit("abc123", "31/Dec/1999:23:59:59 -0500", 200),
        share_hit("q", "05/Nope/2024:10:20:30 +0000", 200),
    ];

    for line in &lines {
        // Act
        let record = parse_line(line, StatusFilter::Permissive).unwrap();

        // Assert
        assert!(record.message_url.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(
            record
                .viewed_at
                .chars()
                .all(|c| c.is_ascii_digit() || c == '-' || c == ':' || c == ' ')
        );
    }
}

#[test]
fn permissive_filter_matches_incidental_200() {
    // A 404 with a 200-byte response size still carries " 200 " and slips
    // through the substring check.
    let line = r#"1.2.3.4 - - [05/Jan/2024:10:20:30 +0000] "GET /s/abc123 HTTP/1.1" 404 200 "-""#;

    let record = parse_line(line, StatusFilter::Permissive);

    assert!(record.is_some());
}

#[test]
fn strict_filter_accepts_exact_status_field() {
    // Arrange
    let line = share_hit("abc123", "05/Jan/2024:10:20:30 +0000", 200);

    // Act
    let record = parse_line(&line, StatusFilter::Strict);

    // Assert
    assert_eq!(
        record.map(|r| r.message_url),
        Some("abc123".to_string())
    );
}

#[test]
fn strict_filter_rejects_incidental_200() {
    // Arrange: same over-match bait as the permissive test.
    let line = r#"1.2.3.4 - - [05/Jan/2024:10:20:30 +0000] "GET /s/abc123 HTTP/1.1" 404 200 "-""#;

    // Act + Assert
    assert_eq!(parse_line(line, StatusFilter::Strict), None);
}

#[test]
fn strict_filter_rejects_lines_outside_the_layout() {
    // Arrange: contains " 200 " but is not a positional access-log line.
    let line = "free text mentioning 200 and GET /s/abc123 [05/Jan/2024:10:20:30";

    // Act + Assert
    assert_eq!(parse_line(line, StatusFilter::Strict), None);
}
