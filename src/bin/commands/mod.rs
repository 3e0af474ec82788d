use std::fs::File;
use std::io::{self as stdio, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use seq_forge::Chain;
use seq_forge::io::read_pdb_chains;

pub mod info;
pub mod seq;

/// Source name recorded on chains read from standard input.
const STDIN_SOURCE: &str = "stdin";

/// Aggregated IO parameters shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct IoParameters {
    pub input: Option<PathBuf>,
}

/// Installs a stderr `tracing` subscriber so stdout stays reserved for sequence records.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},seq_forge={level},seqforge={level}",
            level = level.as_str().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stdio::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Loads chain records from the configured input source.
pub fn load_chains(params: &IoParameters) -> Result<Vec<Chain>> {
    if let Some(path) = &params.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let reader = BufReader::new(file);
        let source = path.display().to_string();
        run_with_spinner("Reading chains", || {
            read_pdb_chains(reader, &source)
                .with_context(|| format!("Failed to parse PDB input from {}", path.display()))
        })
    } else {
        let stdin = stdio::stdin();
        if stdin.is_terminal() {
            bail!(
                "No --input provided and stdin is a TTY. Provide -i/--input or pipe a structure into seqforge."
            );
        }
        let reader = BufReader::new(stdin.lock());
        run_with_spinner("Reading chains", || {
            read_pdb_chains(reader, STDIN_SOURCE).context("Failed to parse PDB input from stdin")
        })
    }
}

/// Wraps long-running operations with a spinner rendered to stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_and_clear(),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}
