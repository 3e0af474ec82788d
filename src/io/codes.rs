//! Three-letter to one-letter residue code translation.
//!
//! Exporters only need a total function from residue name to code character, expressed by
//! [`ResidueTranslator`]. [`ResidueCodes`] is the default table: the twenty standard amino
//! acids, the IUPAC ambiguity codes, and common protonation-state and modified-residue
//! aliases that resolve onto a standard parent.

use std::collections::HashMap;

/// Code emitted for any residue name the table does not know.
pub const UNKNOWN_CODE: char = 'X';

/// Maps a three-letter residue name onto its single-character code.
///
/// Implementations must be total: every name yields some character.
pub trait ResidueTranslator {
    fn one_letter(&self, three_letter: &str) -> char;
}

impl<F> ResidueTranslator for F
where
    F: Fn(&str) -> char,
{
    fn one_letter(&self, three_letter: &str) -> char {
        self(three_letter)
    }
}

/// Lookup table resolving residue names (and their aliases) to one-letter codes.
#[derive(Debug, Clone)]
pub struct ResidueCodes {
    alias_map: HashMap<String, String>,
    code_map: HashMap<String, char>,
}

impl ResidueCodes {
    pub fn new_default() -> Self {
        let mut alias_map = HashMap::new();
        let mut code_map = HashMap::new();

        macro_rules! register_code {
            ($canonical:expr, $code:expr) => {
                code_map.insert($canonical.to_string(), $code);
            };
        }

        macro_rules! register_alias {
            ($alias:expr, $canonical:expr) => {
                alias_map.insert($alias.to_string(), $canonical.to_string());
            };
        }

        register_code!("ALA", 'A');
        register_code!("ARG", 'R');
        register_code!("ASN", 'N');
        register_code!("ASP", 'D');
        register_code!("CYS", 'C');
        register_code!("GLN", 'Q');
        register_code!("GLU", 'E');
        register_code!("GLY", 'G');
        register_code!("HIS", 'H');
        register_code!("ILE", 'I');
        register_code!("LEU", 'L');
        register_code!("LYS", 'K');
        register_code!("MET", 'M');
        register_code!("PHE", 'F');
        register_code!("PRO", 'P');
        register_code!("SER", 'S');
        register_code!("THR", 'T');
        register_code!("TRP", 'W');
        register_code!("TYR", 'Y');
        register_code!("VAL", 'V');

        register_code!("ASX", 'B');
        register_code!("GLX", 'Z');
        register_code!("UNK", UNKNOWN_CODE);

        register_alias!("ARN", "ARG");
        register_alias!("ASH", "ASP");
        register_alias!("CYM", "CYS");
        register_alias!("CYX", "CYS");
        register_alias!("GLH", "GLU");
        register_alias!("HID", "HIS");
        register_alias!("HIE", "HIS");
        register_alias!("HIP", "HIS");
        register_alias!("HSD", "HIS");
        register_alias!("HSE", "HIS");
        register_alias!("HSP", "HIS");
        register_alias!("LYN", "LYS");
        register_alias!("TYM", "TYR");

        register_alias!("MSE", "MET");
        register_alias!("SEP", "SER");
        register_alias!("TPO", "THR");
        register_alias!("PTR", "TYR");
        register_alias!("CSO", "CYS");
        register_alias!("CME", "CYS");
        register_alias!("OCS", "CYS");
        register_alias!("KCX", "LYS");
        register_alias!("MLY", "LYS");
        register_alias!("HYP", "PRO");
        register_alias!("PCA", "GLU");
        register_alias!("DAL", "ALA");
        register_alias!("DAR", "ARG");
        register_alias!("DAS", "ASP");
        register_alias!("DCY", "CYS");
        register_alias!("DGL", "GLU");
        register_alias!("DLE", "LEU");
        register_alias!("DLY", "LYS");
        register_alias!("DPN", "PHE");
        register_alias!("DPR", "PRO");
        register_alias!("DSN", "SER");
        register_alias!("DTH", "THR");
        register_alias!("DVA", "VAL");

        Self {
            alias_map,
            code_map,
        }
    }

    /// Resolves an alias to its canonical residue name, or returns the input unchanged.
    pub fn resolve_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.alias_map.get(name).map(|s| s.as_str()).unwrap_or(name)
    }

    pub fn code_of(&self, name: &str) -> Option<char> {
        self.code_map.get(self.resolve_name(name.trim())).copied()
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.code_of(name).is_some()
    }

    pub fn add_code<S: Into<String>>(&mut self, name: S, code: char) {
        self.code_map.insert(name.into(), code);
    }

    pub fn add_alias<S: Into<String>>(&mut self, alias: S, canonical: S) {
        self.alias_map.insert(alias.into(), canonical.into());
    }
}

impl Default for ResidueCodes {
    fn default() -> Self {
        Self::new_default()
    }
}

impl ResidueTranslator for ResidueCodes {
    fn one_letter(&self, three_letter: &str) -> char {
        self.code_of(three_letter).unwrap_or(UNKNOWN_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_letter_translates_standard_amino_acids() {
        let codes = ResidueCodes::new_default();

        let names = [
            "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE", "LEU", "LYS",
            "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
        ];
        let translated: String = names.iter().map(|n| codes.one_letter(n)).collect();

        assert_eq!(translated, "ARNDCQEGHILKMFPSTWYV");
    }

    #[test]
    fn one_letter_translates_ambiguity_codes() {
        let codes = ResidueCodes::new_default();

        assert_eq!(codes.one_letter("ASX"), 'B');
        assert_eq!(codes.one_letter("GLX"), 'Z');
        assert_eq!(codes.one_letter("UNK"), 'X');
    }

    #[test]
    fn one_letter_resolves_aliases_to_parent_code() {
        let codes = ResidueCodes::new_default();

        assert_eq!(codes.one_letter("HID"), 'H');
        assert_eq!(codes.one_letter("HIP"), 'H');
        assert_eq!(codes.one_letter("CYX"), 'C');
        assert_eq!(codes.one_letter("MSE"), 'M');
        assert_eq!(codes.one_letter("ASH"), 'D');
        assert_eq!(codes.one_letter("GLH"), 'E');
    }

    #[test]
    fn one_letter_falls_back_to_unknown_code() {
        let codes = ResidueCodes::new_default();

        assert_eq!(codes.one_letter("HOH"), UNKNOWN_CODE);
        assert_eq!(codes.one_letter("LIG"), UNKNOWN_CODE);
        assert_eq!(codes.one_letter(""), UNKNOWN_CODE);
    }

    #[test]
    fn one_letter_is_case_sensitive() {
        let codes = ResidueCodes::new_default();

        assert_eq!(codes.one_letter("ala"), UNKNOWN_CODE);
        assert_eq!(codes.one_letter("ALA"), 'A');
    }

    #[test]
    fn code_of_ignores_surrounding_whitespace() {
        let codes = ResidueCodes::new_default();

        assert_eq!(codes.code_of(" GLY "), Some('G'));
    }

    #[test]
    fn resolve_name_returns_canonical_for_alias() {
        let codes = ResidueCodes::new_default();

        assert_eq!(codes.resolve_name("HIE"), "HIS");
        assert_eq!(codes.resolve_name("ALA"), "ALA");
        assert_eq!(codes.resolve_name("XYZ"), "XYZ");
    }

    #[test]
    fn is_known_distinguishes_registered_names() {
        let codes = ResidueCodes::new_default();

        assert!(codes.is_known("TRP"));
        assert!(codes.is_known("HSD"));
        assert!(!codes.is_known("HOH"));
    }

    #[test]
    fn add_code_registers_new_residue() {
        let mut codes = ResidueCodes::new_default();

        codes.add_code("SEC", 'U');

        assert_eq!(codes.one_letter("SEC"), 'U');
    }

    #[test]
    fn add_alias_overwrites_existing_alias() {
        let mut codes = ResidueCodes::new_default();
        assert_eq!(codes.one_letter("MSE"), 'M');

        codes.add_alias("MSE", "ALA");

        assert_eq!(codes.one_letter("MSE"), 'A');
    }

    #[test]
    fn closures_act_as_translators() {
        let translator = |name: &str| name.chars().next().unwrap_or('?');

        assert_eq!(translator.one_letter("GLY"), 'G');
        assert_eq!(translator.one_letter(""), '?');
    }
}
