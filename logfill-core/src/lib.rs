pub mod backfill;
pub mod logging;
