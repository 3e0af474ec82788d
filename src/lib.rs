//! # SeqForge
//!
//! **SeqForge** exports the chains of macromolecular structures as FASTA-style sequence
//! records. Each valid chain becomes a header line carrying its source file, chain identifier,
//! residue count, and resolution, followed by one-letter residue codes wrapped at sixty columns.
//!
//! ## Features
//!
//! - **Chain model** – Lightweight `Chain` and `Residue` records that keep residue order and a
//!   per-chain validity flag computed by whichever pipeline stage produced them.
//! - **Pluggable residue codes** – `ResidueTranslator` abstracts three-letter to one-letter
//!   translation; `ResidueCodes` ships the standard amino acids, ambiguity codes, and common aliases.
//! - **Append-safe export** – `SequenceExporter` writes to standard output or appends to a file,
//!   acquiring and releasing the destination exactly once and reporting unusable paths up front.
//! - **PDB intake** – A minimal reader turns `ATOM` records of the first model into chain records.

mod model;

pub mod io;
pub mod ops;

pub use model::chain::{BLANK_CHAIN_ID, Chain};
pub use model::residue::Residue;
