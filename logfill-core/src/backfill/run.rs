use crate::backfill::aggregate::FirstViews;
use crate::backfill::error::BackfillError;
use crate::backfill::parse::parse_line;
use crate::backfill::render::render_sql;
use crate::backfill::types::StatusFilter;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// What to read and how strictly to match the status field.
#[derive(Debug, Clone)]
pub struct BackfillOptions {
    /// Access log to read; stdin when absent.
    pub log_path: Option<PathBuf>,
    pub status_filter: StatusFilter,
}

/// Consume `reader` line by line and collect the first qualifying view per
/// message url.
pub fn scan_log<R: BufRead>(reader: R, filter: StatusFilter) -> Result<FirstViews, BackfillError> {
    let mut views = FirstViews::new();
    let mut lines_read: u64 = 0;
    let mut records: u64 = 0;
    let mut duplicates: u64 = 0;

    for line in reader.lines() {
        let line = line.map_err(BackfillError::read_log)?;
        lines_read += 1;

        let Some(record) = parse_line(&line, filter) else {
            continue;
        };
        records += 1;

        if !views.record(record) {
            duplicates += 1;
        }
    }

    info!(
        lines_read,
        records,
        duplicates,
        unique_views = views.len(),
        "scan complete"
    );

    Ok(views)
}

/// Open the configured input and scan it to completion.
fn collect_views(opts: &BackfillOptions) -> Result<FirstViews, BackfillError> {
    match &opts.log_path {
        Some(path) => {
            debug!(path = %path.display(), "reading access log");
            let file = File::open(path).map_err(|e| BackfillError::open_log(path, e))?;
            // The handle closes when the reader drops at the end of the
            // scan, on the error path included. Stdin is never closed.
            scan_log(BufReader::new(file), opts.status_filter)
        }
        None => {
            debug!("reading access log from stdin");
            scan_log(io::stdin().lock(), opts.status_filter)
        }
    }
}

/// Build the SQL script for `opts` with an injected render clock.
///
/// Nothing is rendered until the scan finishes, so a mid-read failure
/// produces no partial script.
pub fn generate_sql(
    opts: &BackfillOptions,
    generated_at: DateTime<Local>,
) -> Result<String, BackfillError> {
    let views = collect_views(opts)?;
    Ok(render_sql(&views, generated_at))
}

/// Generate the script and write it to stdout in one piece. The render
/// clock is read once the scan has consumed the whole input.
pub fn run_backfill(opts: &BackfillOptions) -> Result<()> {
    let views = collect_views(opts)?;
    let sql = render_sql(&views, Local::now());

    io::stdout()
        .lock()
        .write_all(sql.as_bytes())
        .map_err(BackfillError::write_sql)?;

    Ok(())
}
