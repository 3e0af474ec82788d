use std::fmt;

/// One monomer position within a chain.
///
/// The residue type is kept as its three-letter name exactly as it appeared in the source
/// record; translation to a one-letter code happens only at export time.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub id: i32,
    pub insertion_code: Option<char>,
    pub name: String,
}

impl Residue {
    pub fn new(id: i32, insertion_code: Option<char>, name: &str) -> Self {
        Self {
            id,
            insertion_code,
            name: name.to_string(),
        }
    }

    /// Returns `true` when this residue occupies the given sequence slot.
    pub fn is_at(&self, id: i32, insertion_code: Option<char>) -> bool {
        self.id == id && self.insertion_code == insertion_code
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.insertion_code {
            Some(code) => write!(
                f,
                "Residue {{ id: {}{}, name: \"{}\" }}",
                self.id, code, self.name
            ),
            None => write!(f, "Residue {{ id: {}, name: \"{}\" }}", self.id, self.name),
        }
    }
}
