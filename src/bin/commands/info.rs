use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use seq_forge::Chain;
use seq_forge::io::{ResidueCodes, UNKNOWN_CODE};
use seq_forge::ops::ChainSelection;

/// Report-only command listing the chains that `seq` would consider.
#[derive(Debug, Default, Args)]
pub struct InfoArgs {
    /// Mark only these chain identifiers as selected (e.g. "AB"; "-" for a blank ID).
    #[arg(short, long, value_name = "IDS")]
    pub chains: Option<String>,
}

/// Prints a per-chain table to stderr without writing any sequence records.
pub fn run(chains: &[Chain], args: &InfoArgs) -> Result<()> {
    let selection = args
        .chains
        .as_deref()
        .map(ChainSelection::parse)
        .unwrap_or_default();
    let codes = ResidueCodes::new_default();

    let reports: Vec<ChainReport> = chains
        .iter()
        .map(|chain| ChainReport::new(chain, &selection, &codes))
        .collect();

    print_table(&reports)
}

#[derive(Debug)]
struct ChainReport {
    file: String,
    id: char,
    residues: usize,
    unknown: usize,
    resolution: String,
    exported: bool,
}

impl ChainReport {
    fn new(chain: &Chain, selection: &ChainSelection, codes: &ResidueCodes) -> Self {
        Self {
            file: chain.file.clone(),
            id: chain.header_id(),
            residues: chain.residue_count(),
            unknown: chain
                .iter_residues()
                .filter(|r| codes.code_of(&r.name).is_none())
                .count(),
            resolution: format!("{:.3}", chain.resolution),
            exported: chain.valid && selection.contains(chain.id),
        }
    }
}

fn print_table(reports: &[ChainReport]) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "SeqForge Chain Report")?;
    writeln!(&mut stderr)?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![
        "File",
        "Chain",
        "Residues",
        format!("Unknown ({UNKNOWN_CODE})"),
        "Resolution",
        "Exported"
    ]);
    for report in reports {
        table.add_row(row![
            report.file,
            report.id,
            report.residues,
            report.unknown,
            report.resolution,
            if report.exported { "yes" } else { "no" }
        ]);
    }
    table
        .print(&mut stderr)
        .context("Failed to render chain summary")?;

    let exported = reports.iter().filter(|r| r.exported).count();
    writeln!(
        &mut stderr,
        "{exported} of {} chain(s) would be exported",
        reports.len()
    )?;

    Ok(())
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}
