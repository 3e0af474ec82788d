use super::residue::Residue;
use std::fmt;

/// Placeholder identifier carried by chains that have no explicit chain ID.
pub const BLANK_CHAIN_ID: char = ' ';

/// One polymer chain extracted from a structure file.
///
/// The residue count is always derived from the residue list, so the record cannot carry a
/// count that disagrees with its sequence. Only chains whose `valid` flag is set are exported.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub file: String,
    pub id: char,
    pub resolution: f64,
    pub valid: bool,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(file: &str, id: char) -> Self {
        Self {
            file: file.to_string(),
            id,
            resolution: 0.0,
            valid: true,
            residues: Vec::new(),
        }
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn add_residue(&mut self, residue: Residue) {
        self.residues.push(residue);
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn iter_residues(&self) -> std::slice::Iter<'_, Residue> {
        self.residues.iter()
    }

    /// Chain identifier as written into sequence headers.
    ///
    /// A blank identifier becomes `-` so the header stays splittable on whitespace.
    pub fn header_id(&self) -> char {
        if self.id == BLANK_CHAIN_ID {
            '-'
        } else {
            self.id
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chain {{ file: \"{}\", id: '{}', residues: {}, valid: {} }}",
            self.file,
            self.id,
            self.residue_count(),
            self.valid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_new_creates_valid_empty_chain() {
        let chain = Chain::new("1abc", 'A');

        assert_eq!(chain.file, "1abc");
        assert_eq!(chain.id, 'A');
        assert_eq!(chain.resolution, 0.0);
        assert!(chain.valid);
        assert!(chain.residues.is_empty());
    }

    #[test]
    fn chain_with_resolution_sets_resolution() {
        let chain = Chain::new("1abc", 'A').with_resolution(1.85);

        assert!((chain.resolution - 1.85).abs() < 1e-12);
    }

    #[test]
    fn chain_add_residue_preserves_order() {
        let mut chain = Chain::new("1abc", 'A');
        chain.add_residue(Residue::new(1, None, "MET"));
        chain.add_residue(Residue::new(2, None, "LYS"));
        chain.add_residue(Residue::new(2, Some('A'), "GLY"));

        let names: Vec<&str> = chain.iter_residues().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["MET", "LYS", "GLY"]);
    }

    #[test]
    fn chain_residue_count_tracks_residue_list() {
        let mut chain = Chain::new("1abc", 'A');
        assert_eq!(chain.residue_count(), 0);
        assert!(chain.is_empty());

        chain.add_residue(Residue::new(1, None, "ALA"));

        assert_eq!(chain.residue_count(), 1);
        assert_eq!(chain.residues().len(), chain.residue_count());
        assert!(!chain.is_empty());
    }

    #[test]
    fn header_id_replaces_blank_identifier_with_dash() {
        assert_eq!(Chain::new("1abc", ' ').header_id(), '-');
        assert_eq!(Chain::new("1abc", 'B').header_id(), 'B');
    }

    #[test]
    fn chain_display_formats_correctly() {
        let mut chain = Chain::new("1abc", 'A');
        chain.add_residue(Residue::new(1, None, "ALA"));

        let expected = "Chain { file: \"1abc\", id: 'A', residues: 1, valid: true }";

        assert_eq!(format!("{}", chain), expected);
    }

    #[test]
    fn chain_partial_eq_compares_correctly() {
        let mut chain1 = Chain::new("1abc", 'A');
        let mut chain2 = Chain::new("1abc", 'A');
        chain1.add_residue(Residue::new(1, None, "ALA"));
        chain2.add_residue(Residue::new(1, None, "ALA"));

        let mut chain3 = chain2.clone();
        chain3.valid = false;

        assert_eq!(chain1, chain2);
        assert_ne!(chain1, chain3);
    }
}
