//! Core data structures describing the chains handed to the sequence exporter.
//!
//! A [`chain::Chain`] carries its source file name, identifier, resolution, and validity flag
//! alongside an ordered list of [`residue::Residue`] entries. Readers populate these records;
//! the exporter only ever reads them.

pub mod chain;
pub mod residue;
