//! Chain selection by identifier.
//!
//! A selection narrows which chains are exported by clearing the validity flag of every
//! chain it does not name. It never sets a flag that was already cleared upstream.

use crate::model::chain::{BLANK_CHAIN_ID, Chain};
use std::collections::HashSet;
use tracing::debug;

/// Set of chain identifiers to keep, or every chain when unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSelection {
    ids: Option<HashSet<char>>,
}

impl ChainSelection {
    /// Selection that keeps every chain.
    pub fn all() -> Self {
        Self { ids: None }
    }

    /// Builds a selection from a run of identifier characters such as `"AB"`.
    ///
    /// Whitespace and commas are ignored; `-` stands for the blank
    /// chain identifier. An input without any identifier selects every chain.
    pub fn parse(ids: &str) -> Self {
        let ids: HashSet<char> = ids
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| if c == '-' { BLANK_CHAIN_ID } else { c })
            .collect();

        if ids.is_empty() {
            Self::all()
        } else {
            Self { ids: Some(ids) }
        }
    }

    pub fn is_all(&self) -> bool {
        self.ids.is_none()
    }

    pub fn contains(&self, id: char) -> bool {
        self.ids.as_ref().is_none_or(|ids| ids.contains(&id))
    }

    /// Clears the validity flag of every chain outside the selection.
    ///
    /// Returns how many chains were deselected.
    pub fn apply(&self, chains: &mut [Chain]) -> usize {
        let mut deselected = 0;

        for chain in chains.iter_mut() {
            if chain.valid && !self.contains(chain.id) {
                debug!(file = %chain.file, chain = %chain.id, "chain not selected for export");
                chain.valid = false;
                deselected += 1;
            }
        }

        deselected
    }
}
