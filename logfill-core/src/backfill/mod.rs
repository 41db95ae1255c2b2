//! Access Log Backfill Pipeline
//!
//! This module turns Apache access logs into a SQL script that backfills the
//! `viewed_at` column on `messages`.
//!
//! A message counts as viewed the first time its share link
//! (`GET /s/<token>`) is served with a 200. The pipeline reads the log one
//! line at a time, keeps the earliest qualifying hit per token, and renders
//! one guarded UPDATE per message so the script can be re-applied without
//! clobbering anything.
//!
//! The overall data processing architecture is:
//!
//! file | stdin
//! parse_line
//! ViewRecord
//! FirstViews
//! render_sql
//! stdout
//!

mod aggregate;
mod constants;
mod error;
mod parse;
mod render;
mod run;
#[cfg(test)]
mod tests;
mod types;

pub use aggregate::FirstViews;
pub use error::BackfillError;
pub use parse::parse_line;
pub use render::render_sql;
pub use run::{BackfillOptions, generate_sql, run_backfill, scan_log};
pub use types::{StatusFilter, ViewRecord};
