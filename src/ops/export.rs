//! Sequence export: writes every valid chain as a wrapped one-letter record to standard
//! output or to a file opened for appending.
//!
//! The destination is acquired once per export and released when the export scope ends,
//! on success and on every error path. Failing to open a file destination is reported
//! before any chain is processed, so nothing is written in that case.

use crate::io::{self as seq_io, ResidueCodes, ResidueTranslator, write_fasta_chains};
use crate::model::chain::Chain;
use crate::ops::error::Error;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where exported sequences are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// The process's standard output stream.
    #[default]
    Stdout,
    /// A file opened in append mode, created when absent.
    File(PathBuf),
}

impl Destination {
    /// Maps a destination path onto a [`Destination`]; the empty path selects standard output.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map(Self::from_path).unwrap_or_default()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "file '{}'", path.display()),
        }
    }
}

/// Counts describing a completed export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Sequence records emitted, one per valid chain.
    pub records_written: usize,
    /// Chains skipped because their validity flag was cleared.
    pub chains_skipped: usize,
    /// Residue codes emitted across all records.
    pub residues_written: usize,
}

impl ExportSummary {
    fn tally(chains: &[Chain], records_written: usize) -> Self {
        let (valid, invalid): (Vec<&Chain>, Vec<&Chain>) = chains.iter().partition(|c| c.valid);
        Self {
            records_written,
            chains_skipped: invalid.len(),
            residues_written: valid.iter().map(|c| c.residue_count()).sum(),
        }
    }
}

/// Writes chain sequences using a pluggable residue code translator.
///
/// # Examples
///
/// ```
/// use seq_forge::ops::SequenceExporter;
/// use seq_forge::{Chain, Residue};
///
/// let mut chain = Chain::new("1abc", ' ').with_resolution(2.0);
/// for (i, name) in ["ALA", "GLY", "SER"].iter().enumerate() {
///     chain.add_residue(Residue::new(i as i32 + 1, None, name));
/// }
///
/// let mut out = Vec::new();
/// SequenceExporter::new().write(&mut out, &[chain]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), ">1abc -  3   2.000\nAGS\n");
/// ```
#[derive(Debug, Clone)]
pub struct SequenceExporter<T = ResidueCodes> {
    translator: T,
}

impl SequenceExporter {
    /// Creates an exporter backed by the default [`ResidueCodes`] table.
    pub fn new() -> Self {
        Self {
            translator: ResidueCodes::new_default(),
        }
    }
}

impl Default for SequenceExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ResidueTranslator> SequenceExporter<T> {
    pub fn with_translator(translator: T) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Exports `chains` to `destination_path`, where an empty path means standard output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DestinationUnavailable`] when a file destination cannot be opened for
    /// appending, and [`Error::Write`] when writing or flushing the records fails.
    pub fn export(
        &self,
        chains: &[Chain],
        destination_path: &str,
    ) -> Result<ExportSummary, Error> {
        self.export_to(chains, &Destination::from_path(destination_path))
    }

    /// Exports `chains` to an explicit [`Destination`].
    ///
    /// # Errors
    ///
    /// See [`SequenceExporter::export`].
    pub fn export_to(
        &self,
        chains: &[Chain],
        destination: &Destination,
    ) -> Result<ExportSummary, Error> {
        let summary = match destination {
            Destination::Stdout => {
                let stdout = io::stdout();
                let writer = BufWriter::new(stdout.lock());
                self.write_and_flush(writer, chains, destination)?
            }
            Destination::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| Error::destination_unavailable(path, e))?;
                debug!(path = %path.display(), "opened sequence file for appending");
                self.write_and_flush(BufWriter::new(file), chains, destination)?
            }
        };

        info!(
            destination = %destination,
            records = summary.records_written,
            skipped = summary.chains_skipped,
            residues = summary.residues_written,
            "exported chain sequences"
        );

        Ok(summary)
    }

    /// Writes the records for `chains` into an arbitrary writer without flushing it.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn write<W: Write>(
        &self,
        writer: W,
        chains: &[Chain],
    ) -> Result<ExportSummary, seq_io::Error> {
        let records_written = write_fasta_chains(writer, chains, &self.translator)?;
        Ok(ExportSummary::tally(chains, records_written))
    }

    fn write_and_flush<W: Write>(
        &self,
        mut writer: W,
        chains: &[Chain],
        destination: &Destination,
    ) -> Result<ExportSummary, Error> {
        let summary = self
            .write(&mut writer, chains)
            .map_err(|e| Error::write(destination, e))?;

        writer.flush().map_err(|e| {
            let path = destination.path().map(Path::to_path_buf);
            Error::write(destination, seq_io::Error::from_io(e, path))
        })?;

        Ok(summary)
    }
}
