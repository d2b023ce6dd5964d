//! Module for finding amino acid frequency differences between two samples
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use pyo3::prelude::*;

use ordered_float::OrderedFloat;

use crate::common::{is_structural, DifferenceEntry, Label, Protein};
use crate::compare::flatten;
use crate::frequency::frequency_profile;

#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Highlight colour for a label's chart edge
pub enum EdgeColor {
    /// Frequency is the same in both samples
    White,

    /// Frequency differs between the samples
    Black,
}

impl fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeColor::White => write!(f, "white"),
            EdgeColor::Black => write!(f, "black"),
        }
    }
}

#[pyclass(eq)]
#[derive(Clone, Debug, PartialEq)]
/// Controls which frequency differences get reported
pub struct DifferenceOptions {
    #[pyo3(get, set)]
    /// Differences must be strictly larger than this to be reported
    pub threshold: f64,

    #[pyo3(get, set)]
    /// Only consider labels which occur in both samples
    pub shared_only: bool,
}

impl Default for DifferenceOptions {
    /// Report every label with any difference at all
    fn default() -> Self {
        DifferenceOptions {
            threshold: 0.0,
            shared_only: false,
        }
    }
}

impl DifferenceOptions {
    /// Only labels present in both samples whose frequencies differ by more than 2%
    pub fn significant() -> Self {
        DifferenceOptions {
            threshold: 0.02,
            shared_only: true,
        }
    }
}

#[cfg(not(tarpaulin_include))]
#[pymethods]
impl DifferenceOptions {
    #[new]
    #[pyo3(signature = (threshold=0.0, shared_only=false))]
    fn py_new(threshold: f64, shared_only: bool) -> Self {
        DifferenceOptions {
            threshold,
            shared_only,
        }
    }

    #[staticmethod]
    #[pyo3(name = "significant")]
    fn py_significant() -> Self {
        DifferenceOptions::significant()
    }
}

/// Amino acid frequencies of a sample, markers dropped
fn amino_acid_frequencies(proteins: &[Protein]) -> HashMap<Label, f64> {
    frequency_profile(&flatten(proteins))
        .into_iter()
        .filter(|entry| !is_structural(&entry.label))
        .map(|entry| (entry.label, entry.frequency))
        .collect()
}

/// Amino acids whose frequency differs between two samples
///
/// Uses the default options: every label in either sample, absent labels
/// count as 0.0, and any nonzero difference is reported.
pub fn find_differences(first: &[Protein], second: &[Protein]) -> Vec<DifferenceEntry> {
    find_differences_with(first, second, &DifferenceOptions::default())
}

/// Amino acids whose frequency differs between two samples
///
/// `Start` and `Stop` are never reported.
///
/// # Arguments
/// - `first` - Proteins of the first sample
/// - `second` - Proteins of the second sample
/// - `options` - Threshold and label selection
///
/// # Returns
/// Differences sorted by descending magnitude, ties broken by label
pub fn find_differences_with(
    first: &[Protein],
    second: &[Protein],
    options: &DifferenceOptions,
) -> Vec<DifferenceEntry> {
    let freqs_a = amino_acid_frequencies(first);
    let freqs_b = amino_acid_frequencies(second);
    let labels: BTreeSet<&Label> = freqs_a.keys().chain(freqs_b.keys()).collect();

    let mut differences = Vec::new();
    for label in labels {
        let in_a = freqs_a.get(label);
        let in_b = freqs_b.get(label);
        if options.shared_only && (in_a.is_none() || in_b.is_none()) {
            continue;
        }
        let entry = DifferenceEntry {
            label: label.clone(),
            frequency_a: in_a.copied().unwrap_or(0.0),
            frequency_b: in_b.copied().unwrap_or(0.0),
        };
        if entry.magnitude() > options.threshold {
            differences.push(entry);
        }
    }

    differences.sort_by(|a, b| {
        OrderedFloat(b.magnitude())
            .cmp(&OrderedFloat(a.magnitude()))
            .then_with(|| a.label.cmp(&b.label))
    });
    differences
}

/// Colour each label black if it differs between samples, else white
pub fn edge_coloring(label_set: &[Label], differences: &[DifferenceEntry]) -> Vec<EdgeColor> {
    let differing: BTreeSet<&str> = differences.iter().map(|d| d.label.as_str()).collect();
    label_set
        .iter()
        .map(|label| {
            if differing.contains(label.as_str()) {
                EdgeColor::Black
            } else {
                EdgeColor::White
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::tests::{protein, sample_one, sample_three, sample_two};
    use crate::frequency::global_label_set;
    use pretty_assertions::assert_eq;

    fn labels_of(differences: &[DifferenceEntry]) -> Vec<&str> {
        differences.iter().map(|d| d.label.as_str()).collect()
    }

    #[test]
    fn test_no_difference_with_self() {
        for sample in [sample_one(), sample_two(), sample_three()] {
            assert!(find_differences(&sample, &sample).is_empty());
            assert!(
                find_differences_with(&sample, &sample, &DifferenceOptions::significant())
                    .is_empty()
            );
        }
    }

    #[test]
    fn test_find_differences() {
        let differences = find_differences(&sample_one(), &sample_three());
        // Asn 0.2 vs 0; Pro, Val, His 1/14 vs 0; Lys 0 vs 0.05; Asp, Glu 1/14 vs 0.1; Phe 1/14 vs 0.05
        assert_eq!(
            labels_of(&differences),
            vec!["Asn", "His", "Pro", "Val", "Lys", "Asp", "Glu", "Phe"]
        );
        assert_eq!(differences[0].frequency_a, 0.0);
        assert_eq!(differences[0].frequency_b, 0.2);
        assert_eq!(differences[4].frequency_a, 0.0);
        assert_eq!(differences[4].frequency_b, 0.05);
        assert!(differences
            .windows(2)
            .all(|pair| pair[0].magnitude() >= pair[1].magnitude()));
    }

    #[test]
    fn test_markers_never_reported() {
        let first = vec![protein(&["Start", "His", "Stop"])];
        let second = vec![
            protein(&["Start", "His", "Stop"]),
            protein(&["Start", "His", "His", "His", "His"]),
        ];
        // Start and Stop frequencies differ but are structural
        let differences = find_differences(&first, &second);
        assert_eq!(labels_of(&differences), vec!["His"]);
    }

    #[test]
    fn test_significant_differences() {
        let significant = DifferenceOptions::significant();
        assert!(find_differences_with(&sample_one(), &sample_two(), &significant).is_empty());

        let differences = find_differences_with(&sample_one(), &sample_three(), &significant);
        assert_eq!(differences.len(), 3);
        let mut top: Vec<&str> = labels_of(&differences[..2]);
        top.sort();
        assert_eq!(top, vec!["Asp", "Glu"]);
        assert_eq!(differences[2].label, "Phe");

        let differences = find_differences_with(&sample_two(), &sample_three(), &significant);
        assert_eq!(labels_of(&differences), vec!["Asp", "Glu"]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let first = vec![protein(&["Start", "His", "Stop"])];
        let second = vec![protein(&["Start", "Stop"])];
        let exact = DifferenceOptions {
            threshold: 1.0 / 3.0,
            shared_only: false,
        };
        assert!(find_differences_with(&first, &second, &exact).is_empty());
    }

    #[test]
    fn test_edge_coloring() {
        let gene_list = vec![sample_one(), sample_three()];
        let labels = global_label_set(&gene_list);
        let differences = find_differences_with(
            &sample_one(),
            &sample_three(),
            &DifferenceOptions::significant(),
        );
        use EdgeColor::{Black, White};
        assert_eq!(
            edge_coloring(&labels, &differences),
            vec![White, Black, Black, White, White, Black, White, White, White, White]
        );

        // Default options flag every amino acid which is not shared equally
        let differences = find_differences(&sample_one(), &sample_three());
        assert_eq!(
            edge_coloring(&labels, &differences),
            vec![Black, Black, Black, Black, Black, Black, Black, White, White, Black]
        );
    }

    #[test]
    fn test_edge_color_names() {
        assert_eq!(EdgeColor::White.to_string(), "white");
        assert_eq!(EdgeColor::Black.to_string(), "black");
    }
}
