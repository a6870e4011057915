use anyhow::{Context, Result};

use subx::cli;
use subx::config::load_config;
use subx::logger;
use subx::runner;

fn main() -> Result<()> {
    let args = cli::parse_args();
    logger::init_logging(args.verbose);

    let working_dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let config = load_config(&args.config)?;
    let summary = runner::run(&working_dir, &config, args.threads)?;

    println!(
        "{} file(s) changed, {} unchanged",
        summary.files_changed, summary.files_unchanged
    );

    Ok(())
}
