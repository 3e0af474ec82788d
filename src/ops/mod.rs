//! High-level operations over chain lists: selecting which chains to export and writing
//! them to their destination.
//!
//! [`SequenceExporter`] owns the destination lifecycle and reports an [`ExportSummary`];
//! [`ChainSelection`] narrows a chain list before export. Both share the [`Error`] type.

mod error;
mod export;
mod select;

pub use export::{Destination, ExportSummary, SequenceExporter};

pub use select::ChainSelection;

pub use error::Error;
