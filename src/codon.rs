//! Module for the RNA codon to amino acid lookup table
use pyo3::prelude::*;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::common::{Codon, Label, START, STOP};
use crate::error::{ProtSeqError, Result};

/// Codon which opens every protein
pub const START_CODON: &str = "AUG";

/// Codons which close a protein
pub const STOP_CODONS: [&str; 3] = ["UAA", "UAG", "UGA"];

/// Standard genetic code, grouped by the label each codon translates to
const STANDARD_CODE: [(&str, &[&str]); 21] = [
    ("Ala", &["GCU", "GCC", "GCA", "GCG"]),
    ("Arg", &["CGU", "CGC", "CGA", "CGG", "AGA", "AGG"]),
    ("Asn", &["AAU", "AAC"]),
    ("Asp", &["GAU", "GAC"]),
    ("Cys", &["UGU", "UGC"]),
    ("Gln", &["CAA", "CAG"]),
    ("Glu", &["GAA", "GAG"]),
    ("Gly", &["GGU", "GGC", "GGA", "GGG"]),
    ("His", &["CAU", "CAC"]),
    ("Ile", &["AUU", "AUC", "AUA"]),
    ("Leu", &["UUA", "UUG", "CUU", "CUC", "CUA", "CUG"]),
    ("Lys", &["AAA", "AAG"]),
    ("Phe", &["UUU", "UUC"]),
    ("Pro", &["CCU", "CCC", "CCA", "CCG"]),
    ("Ser", &["UCU", "UCC", "UCA", "UCG", "AGU", "AGC"]),
    ("Thr", &["ACU", "ACC", "ACA", "ACG"]),
    ("Trp", &["UGG"]),
    ("Tyr", &["UAU", "UAC"]),
    ("Val", &["GUU", "GUC", "GUA", "GUG"]),
    // Methionine only appears through the start codon
    (START, &[START_CODON]),
    (STOP, &STOP_CODONS),
];

static STANDARD_TABLE: LazyLock<CodonTable> = LazyLock::new(CodonTable::standard);

/// Whether a codon terminates a protein
pub fn is_stop_codon(codon: &str) -> bool {
    STOP_CODONS.contains(&codon)
}

#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
/// Read-only mapping of RNA codon to amino acid label
pub struct CodonTable {
    /// Codon -> label
    codons: HashMap<Codon, Label>,
}

impl CodonTable {
    /// Build the standard 64 codon table
    ///
    /// `AUG` maps to `Start`, `UAA`/`UAG`/`UGA` map to `Stop`, every other
    /// codon maps to a three letter amino acid abbreviation.
    pub fn standard() -> Self {
        let mut codons = HashMap::with_capacity(64);
        for (label, group) in STANDARD_CODE.iter() {
            for codon in group.iter() {
                codons.insert(codon.to_string(), label.to_string());
            }
        }
        CodonTable { codons }
    }

    /// Build a table from JSON of the form `{"Lys": ["AAA", "AAG"], ...}`
    ///
    /// Codons may be given as DNA or RNA in either case; they are stored as
    /// upper case RNA.
    ///
    /// # Arguments
    /// - `text` - JSON document mapping label to its codons
    ///
    /// # Returns
    /// Table, or an error if the JSON is malformed, a codon is not 3 bases
    /// of A/C/G/U, or a codon is listed twice
    pub fn from_json(text: &str) -> Result<Self> {
        let groups: HashMap<String, Vec<String>> = serde_json::from_str(text)?;
        let mut codons = HashMap::new();
        for (label, group) in groups {
            if label.is_empty() {
                return Err(ProtSeqError::InvalidInput(
                    "codon table contains an empty label".to_string(),
                ));
            }
            for raw in group {
                let codon: Codon = raw
                    .to_uppercase()
                    .chars()
                    .map(|c| if c == 'T' { 'U' } else { c })
                    .collect();
                if codon.len() != 3 || !codon.chars().all(|c| "ACGU".contains(c)) {
                    return Err(ProtSeqError::InvalidInput(format!(
                        "invalid codon {:?} for {}",
                        raw, label
                    )));
                }
                if let Some(previous) = codons.insert(codon.clone(), label.clone()) {
                    return Err(ProtSeqError::InvalidInput(format!(
                        "codon {} listed for both {} and {}",
                        codon, previous, label
                    )));
                }
            }
        }
        Ok(CodonTable { codons })
    }

    /// Read a JSON codon table from disk. See `from_json`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        CodonTable::from_json(&text)
    }

    /// Label for a codon, if the table has one
    pub fn get(&self, codon: &str) -> Option<&str> {
        self.codons.get(codon).map(|label| label.as_str())
    }

    /// Number of codons in the table
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    /// Whether the table has no codons at all
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    /// All codons which translate to `label`, sorted
    pub fn codons_for(&self, label: &str) -> Vec<Codon> {
        let mut found: Vec<Codon> = self
            .codons
            .iter()
            .filter(|(_, l)| l.as_str() == label)
            .map(|(codon, _)| codon.clone())
            .collect();
        found.sort();
        found
    }
}

#[cfg(not(tarpaulin_include))]
#[pymethods]
impl CodonTable {
    #[new]
    /// Create the standard codon table
    fn py_new() -> Self {
        CodonTable::standard()
    }

    #[staticmethod]
    #[pyo3(name = "from_json")]
    fn py_from_json(text: &str) -> PyResult<Self> {
        Ok(CodonTable::from_json(text)?)
    }

    #[pyo3(name = "get")]
    fn py_get(&self, codon: &str) -> Option<String> {
        self.get(codon).map(str::to_string)
    }

    fn __len__(&self) -> usize {
        self.len()
    }

    fn __contains__(&self, codon: &str) -> bool {
        self.codons.contains_key(codon)
    }
}

/// Build the standard codon table
pub fn build_codon_table() -> CodonTable {
    CodonTable::standard()
}

/// Process-wide standard codon table, built on first use
pub fn codon_table() -> &'static CodonTable {
    &STANDARD_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_table_is_total() {
        let table = build_codon_table();
        assert_eq!(table.len(), 64);
        for a in "ACGU".chars() {
            for b in "ACGU".chars() {
                for c in "ACGU".chars() {
                    let codon: String = [a, b, c].iter().collect();
                    assert!(table.get(&codon).is_some(), "missing {}", codon);
                }
            }
        }
    }

    #[test]
    fn test_standard_lookups() {
        let table = build_codon_table();
        assert_eq!(table.get("AAA"), Some("Lys"));
        assert_eq!(table.get("GGA"), Some("Gly"));
        assert_eq!(table.get("AUG"), Some("Start"));
        assert_eq!(table.get("UAA"), Some("Stop"));
        assert_eq!(table.get("UGG"), Some("Trp"));
        assert_eq!(table.get("ATG"), None);
        assert_eq!(table.get("AU"), None);
    }

    #[test]
    fn test_markers() {
        let table = build_codon_table();
        assert_eq!(table.codons_for("Start"), vec!["AUG".to_string()]);
        assert_eq!(
            table.codons_for("Stop"),
            vec!["UAA".to_string(), "UAG".to_string(), "UGA".to_string()]
        );

        // Met is only reachable through the start codon
        let mut labels: Vec<&str> = table
            .codons
            .values()
            .map(|l| l.as_str())
            .filter(|l| *l != "Start" && *l != "Stop")
            .collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 19);
        assert_eq!(table.codons_for("Leu").len(), 6);
    }

    #[test]
    fn test_stop_codons() {
        assert!(is_stop_codon("UAA"));
        assert!(is_stop_codon("UAG"));
        assert!(is_stop_codon("UGA"));
        assert!(!is_stop_codon("TAA"));
        assert!(!is_stop_codon("AUG"));
    }

    #[test]
    fn test_static_table() {
        assert_eq!(codon_table(), &CodonTable::standard());
        assert!(std::ptr::eq(codon_table(), codon_table()));
    }

    #[test]
    fn test_from_json() {
        let table =
            CodonTable::from_json(r#"{"Met": ["ATG"], "Lys": ["aaa", "AAG"], "Stop": ["UAA"]}"#)
                .unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("AUG"), Some("Met"));
        assert_eq!(table.get("AAA"), Some("Lys"));
        assert_eq!(table.get("AAG"), Some("Lys"));
        assert_eq!(table.get("UAA"), Some("Stop"));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            CodonTable::from_json("not json"),
            Err(ProtSeqError::Parse(_))
        ));
        assert!(matches!(
            CodonTable::from_json(r#"{"Lys": ["AAAA"]}"#),
            Err(ProtSeqError::InvalidInput(_))
        ));
        assert!(matches!(
            CodonTable::from_json(r#"{"Lys": ["AXA"]}"#),
            Err(ProtSeqError::InvalidInput(_))
        ));
        assert!(matches!(
            CodonTable::from_json(r#"{"Lys": ["AAA"], "Asn": ["AAA"]}"#),
            Err(ProtSeqError::InvalidInput(_))
        ));
        assert!(matches!(
            CodonTable::from_json(r#"{"": ["AAA"]}"#),
            Err(ProtSeqError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let table = CodonTable::from_json_file("reference/standard-codons.json").unwrap();
        assert_eq!(table.len(), 64);
        assert_eq!(table.get("AUG"), Some("Met"));
        let standard = build_codon_table();
        for codon in standard.codons.keys() {
            if codon != START_CODON {
                assert_eq!(table.get(codon), standard.get(codon));
            }
        }
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            CodonTable::from_json_file("not/a/path.json"),
            Err(ProtSeqError::Io(_))
        ));
    }
}
