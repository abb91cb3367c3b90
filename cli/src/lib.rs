//! Argument parsing and command execution for the `formdash` binary.
//!
//! Each command returns the JSON document to print, so the binary only
//! handles logging setup and output.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use formdash_compare::{CompareOptions, build_comparison_rows_with, flatten_rows, summarize};
use formdash_mockdata::MockDataGenerator;
use formdash_schema::FormSchema;
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "formdash")]
#[command(about = "Compare form snapshots and generate mock grid data")]
pub struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two JSON snapshots field by field against a form schema
    Compare(CompareArgs),
    /// Generate deterministic mock grid rows
    Generate(GenerateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct CompareArgs {
    /// Path to the JSON schema
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Path to the previous snapshot (absent if omitted)
    #[arg(short, long)]
    pub prev: Option<PathBuf>,

    /// Path to the current snapshot (absent if omitted)
    #[arg(short, long)]
    pub current: Option<PathBuf>,

    /// Print a flat list with tree paths instead of nested rows
    #[arg(long)]
    pub flat: bool,

    /// Extra keys to leave out of the comparison (repeatable)
    #[arg(long = "skip-key")]
    pub skip_keys: Vec<String>,

    /// Compare every key, including authorship metadata
    #[arg(long)]
    pub no_default_skip: bool,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Number of rows to generate
    #[arg(short, long, allow_negative_numbers = true)]
    pub rows: f64,
}

impl Args {
    /// Runs the selected command.
    pub fn run(&self) -> Result<Value> {
        match &self.command {
            Command::Compare(args) => run_compare(args),
            Command::Generate(args) => run_generate(args),
        }
    }
}

/// Reads and parses a JSON file.
pub fn load_json(path: &Path) -> Result<Value> {
    debug!("Loading JSON from {:?}", path);
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

pub fn run_compare(args: &CompareArgs) -> Result<Value> {
    let schema_value = load_json(&args.schema)?;
    let schema = FormSchema::from_value(&schema_value);
    if schema.is_none() {
        warn!("Schema {:?} has no properties map, nothing to compare", args.schema);
    }

    let prev = args.prev.as_deref().map(load_json).transpose()?;
    let current = args.current.as_deref().map(load_json).transpose()?;

    let base = if args.no_default_skip {
        CompareOptions::without_skip_keys()
    } else {
        CompareOptions::default()
    };
    let options = args
        .skip_keys
        .iter()
        .fold(base, |options, key| options.skip_key(key.as_str()));

    let rows = build_comparison_rows_with(prev.as_ref(), current.as_ref(), schema.as_ref(), &options);
    let counts = summarize(&rows);
    info!(
        "Compared {} fields: {} new, {} removed, {} changed",
        counts.untouched + counts.new + counts.removed + counts.changed,
        counts.new,
        counts.removed,
        counts.changed
    );

    let output = if args.flat {
        serde_json::to_value(flatten_rows(&rows))
    } else {
        serde_json::to_value(&rows)
    };
    output.context("Failed to serialize comparison")
}

pub fn run_generate(args: &GenerateArgs) -> Result<Value> {
    let rows = MockDataGenerator::new().generate(args.rows)?;
    info!("Generated {} rows", rows.len());
    serde_json::to_value(rows).context("Failed to serialize rows")
}
