//! Line-oriented driver for the table engine.
//!
//! Usage:
//!   holdem-table [SCRIPT] [--config table.json] [--seed N] [--quiet]
//!
//! Reads one command per line from SCRIPT (or stdin), applies it and prints the
//! table. Besides the engine commands two driver lines are understood:
//!   advise          print the advice request for the player to act
//!   suggest <json>  apply an advice response as the current actor's action

use anyhow::{Context, Result};
use clap::Parser;
use holdem_table::advice::{self, Suggestion};
use holdem_table::config::TableConfig;
use holdem_table::engine::Command;
use holdem_table::table::Table;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive a Hold'em table from a command script")]
struct Args {
    /// Command script; stdin when omitted
    script: Option<PathBuf>,

    /// JSON table configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shuffle seed, overrides the configuration
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only print rejections and advice
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::builder().format_target(false).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TableConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!("holdem-table {} with {:?}", holdem_table::VERSION, config);

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut table = Table::new(config).context("invalid table configuration")?;
    for (n, line) in input.lines().enumerate() {
        let line = line.context("reading command")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        run_line(&mut table, line, n + 1, args.quiet)?;
    }
    Ok(())
}

fn run_line(table: &mut Table, line: &str, line_no: usize, quiet: bool) -> Result<()> {
    if line == "advise" {
        match advice::request(table) {
            Ok(request) => println!("{}", serde_json::to_string_pretty(&request)?),
            Err(e) => println!("{line_no}: no advice: {e}"),
        }
        return Ok(());
    }

    let command = if let Some(raw) = line.strip_prefix("suggest ") {
        match Suggestion::from_json(raw).and_then(|s| advice::suggested_command(table, &s)) {
            Ok(command) => command,
            Err(e) => {
                println!("{line_no}: suggestion ignored: {e}");
                return Ok(());
            }
        }
    } else {
        match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("line {line_no}: {e}");
                println!("{line_no}: {e}");
                return Ok(());
            }
        }
    };

    match table.apply(command) {
        Ok(()) if !quiet => print!("{table}"),
        Ok(()) => {}
        Err(e) => println!("{line_no}: rejected: {e}"),
    }
    Ok(())
}
