use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use seq_forge::Chain;
use seq_forge::ops::{ChainSelection, Destination, SequenceExporter};

/// Writes chain sequences to stdout or appends them to a sequence file.
#[derive(Debug, Default, Args)]
pub struct SeqArgs {
    /// Sequence file to append to. When omitted, records go to stdout.
    #[arg(short = 'q', long = "seq-file", value_name = "FILE")]
    pub seq_file: Option<PathBuf>,
    /// Export only these chain identifiers (e.g. "AB"; "-" for a blank ID).
    #[arg(short, long, value_name = "IDS")]
    pub chains: Option<String>,
}

/// Applies the chain selection and exports every remaining valid chain.
pub fn run(mut chains: Vec<Chain>, args: &SeqArgs) -> Result<()> {
    if let Some(ids) = &args.chains {
        let deselected = ChainSelection::parse(ids).apply(&mut chains);
        info!(deselected, selection = %ids, "applied chain selection");
    }

    let destination = Destination::from(args.seq_file.clone());
    SequenceExporter::new()
        .export_to(&chains, &destination)
        .with_context(|| format!("Failed to export sequences to {destination}"))?;

    Ok(())
}
