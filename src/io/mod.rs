//! IO front-end for chain records: a minimal PDB chain reader, the residue code table, and
//! the FASTA-style sequence writer.
//!
//! Readers turn structure files into [`Chain`](crate::Chain) records; the writer turns those
//! records back into wrapped one-letter sequences. Both share the [`Error`] type so callers
//! can surface path and line diagnostics uniformly.

mod codes;
mod error;
mod fasta;
mod pdb;

pub use codes::{ResidueCodes, ResidueTranslator, UNKNOWN_CODE};

pub use fasta::writer::{LINE_WIDTH, write_chains as write_fasta_chains};

pub use pdb::reader::read as read_pdb_chains;

pub use error::Error;
