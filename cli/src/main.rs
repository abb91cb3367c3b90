//! formdash command-line tool
//!
//! Usage:
//!   formdash compare --schema form.json --prev a.json --current b.json
//!   formdash generate --rows 100
//!
//! Output is pretty-printed JSON on stdout; logs go to stderr.
//! `FORMDASH_LOG` (e.g. `formdash_compare=debug`) overrides `--verbose`.

use anyhow::Result;
use clap::Parser;
use formdash_cli::Args;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV: &str = "FORMDASH_LOG";

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let output = args.run()?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
