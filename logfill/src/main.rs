use clap::Parser;
use logfill_core::backfill::{BackfillOptions, StatusFilter, run_backfill};
use logfill_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logfill",
    version,
    about = "Generate viewed_at backfill SQL from Apache access logs"
)]
struct Cli {
    /// Access log to read; stdin when omitted
    log_file: Option<PathBuf>,

    /// Require an exact 200 status field (positional parse) instead of the
    /// permissive substring match
    #[arg(long)]
    strict_status: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let status_filter = if cli.strict_status {
        StatusFilter::Strict
    } else {
        StatusFilter::Permissive
    };

    let opts = BackfillOptions {
        log_path: cli.log_file,
        status_filter,
    };

    if let Err(e) = run_backfill(&opts) {
        eprintln!("logfill error: {e}");
        std::process::exit(1);
    }
}
