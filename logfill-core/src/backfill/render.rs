use crate::backfill::aggregate::FirstViews;
use chrono::{DateTime, Local};

/// Render the complete backfill script for `views`.
///
/// One transaction, one guarded UPDATE per entry in first-seen order. The
/// `viewed_at IS NULL` guard makes every statement idempotent: re-applying
/// the script after a successful run changes nothing.
pub fn render_sql(views: &FirstViews, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("-- Backfill viewed_at from Apache access logs\n");
    out.push_str(&format!(
        "-- Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "-- Found {} unique message views\n",
        views.len()
    ));
    out.push('\n');
    out.push_str("BEGIN TRANSACTION;\n");
    out.push('\n');

    for (message_url, viewed_at) in views.iter() {
        // No escaping: extraction guarantees alphanumeric urls and
        // digit/colon timestamp fields.
        out.push_str(&format!(
            "UPDATE messages SET viewed_at = '{viewed_at}' WHERE message_url = '{message_url}' AND viewed_at IS NULL;\n"
        ));
    }

    out.push('\n');
    out.push_str("COMMIT;\n");

    out
}
