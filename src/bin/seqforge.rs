use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;

use commands::IoParameters;
use commands::{info, seq};

#[derive(Parser, Debug)]
#[command(
    name = "seqforge",
    about = "A command-line tool for exporting the chain sequences of biological macromolecules.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Input PDB file path. When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// Increase log verbosity on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export valid chains as wrapped one-letter sequence records.
    Seq(seq::SeqArgs),
    /// Summarize the chains found in the input.
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);

    let io_params = IoParameters {
        input: cli.input.clone(),
    };

    match cli.command {
        Command::Seq(args) => {
            let chains = commands::load_chains(&io_params)?;
            seq::run(chains, &args)?;
        }
        Command::Info(args) => {
            let chains = commands::load_chains(&io_params)?;
            info::run(&chains, &args)?;
        }
    }

    Ok(())
}
