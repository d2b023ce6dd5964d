//! Module of common types and constants used throughout the program
use pyo3::prelude::*;

use crate::error::{ProtSeqError, Result};

/// Three letter RNA codon, e.g `AUG`
pub type Codon = String;

/// Amino acid abbreviation, or one of the structural markers `Start`/`Stop`
pub type Label = String;

/// Ordered amino acid labels, from a `Start` to its paired `Stop`
pub type Protein = Vec<Label>;

/// Proteins of a single sample, in the order they appear in the sequence
pub type ProteinList = Vec<Protein>;

/// One protein list per sample
pub type GeneList = Vec<ProteinList>;

/// Label used for the start codon when it opens a protein
pub const START: &str = "Start";

/// Label used for stop codons
pub const STOP: &str = "Stop";

/// Amino acid the start codon encodes when it occurs inside a protein
pub const METHIONINE: &str = "Met";

/// Whether a label is one of the structural markers rather than an amino acid
pub fn is_structural(label: &str) -> bool {
    label == START || label == STOP
}

#[pyclass(eq)]
#[derive(Clone, Debug, PartialEq)]
/// Relative frequency of a single label within one sample
pub struct FrequencyEntry {
    #[pyo3(get, set)]
    /// Occurrences of this label over the total number of labels, in [0, 1]
    pub frequency: f64,

    #[pyo3(get, set)]
    /// Label being counted
    pub label: Label,
}

#[cfg(not(tarpaulin_include))]
#[pymethods]
impl FrequencyEntry {
    fn __repr__(&self) -> String {
        format!("FrequencyEntry({}, {:?})", self.frequency, self.label)
    }
}

#[pyclass(eq)]
#[derive(Clone, Debug, PartialEq)]
/// Label whose frequency differs between two samples
pub struct DifferenceEntry {
    #[pyo3(get, set)]
    /// Amino acid label
    pub label: Label,

    #[pyo3(get, set)]
    /// Frequency in the first sample. 0.0 if absent
    pub frequency_a: f64,

    #[pyo3(get, set)]
    /// Frequency in the second sample. 0.0 if absent
    pub frequency_b: f64,
}

impl DifferenceEntry {
    /// Absolute difference between the two frequencies
    pub fn magnitude(&self) -> f64 {
        (self.frequency_a - self.frequency_b).abs()
    }
}

#[cfg(not(tarpaulin_include))]
#[pymethods]
impl DifferenceEntry {
    fn __repr__(&self) -> String {
        format!(
            "DifferenceEntry({:?}, {}, {})",
            self.label, self.frequency_a, self.frequency_b
        )
    }
}

/// Set up the number of threads to use for per-sample parallel work
/// If None, use the default number of threads (usually the number of cores)
///
/// Should be called before any parallel work happens, and only once.
///
/// # Arguments
/// * `num_threads` - Number of threads to use for parallel operations
pub fn configure_threads(num_threads: Option<usize>) -> Result<()> {
    let builder = match num_threads {
        Some(0) => {
            return Err(ProtSeqError::InvalidInput(
                "thread count must be at least 1".to_string(),
            ))
        }
        Some(num) => rayon::ThreadPoolBuilder::new().num_threads(num),
        None => rayon::ThreadPoolBuilder::new(),
    };
    builder
        .build_global()
        .map_err(|e| ProtSeqError::InvalidInput(format!("Error setting up threads: {}", e)))
}
