//! Module for amino acid frequency statistics
use std::collections::{BTreeSet, HashMap};

use log::debug;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::common::{is_structural, FrequencyEntry, Label, Protein, ProteinList};
use crate::compare::flatten;

/// Number of times each distinct label occurs
pub fn count_occurrences(labels: &[Label]) -> HashMap<Label, usize> {
    let mut counts: HashMap<Label, usize> = HashMap::new();
    for label in labels.iter() {
        *counts.entry(label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Order entries by ascending frequency, ties broken by label
fn sort_entries(entries: &mut [FrequencyEntry]) {
    entries.sort_by(|a, b| {
        OrderedFloat(a.frequency)
            .cmp(&OrderedFloat(b.frequency))
            .then_with(|| a.label.cmp(&b.label))
    });
}

/// Relative frequency of every distinct label
///
/// The denominator is the total number of labels, `Start` and `Stop`
/// included, so the frequencies sum to 1.
///
/// # Returns
/// Entries sorted ascending by frequency, ties broken alphabetically
pub fn frequency_profile(labels: &[Label]) -> Vec<FrequencyEntry> {
    let total = labels.len() as f64;
    let mut entries: Vec<FrequencyEntry> = count_occurrences(labels)
        .into_iter()
        .map(|(label, count)| FrequencyEntry {
            frequency: count as f64 / total,
            label,
        })
        .collect();
    sort_entries(&mut entries);
    entries
}

/// Frequency profile of the amino acids only
///
/// Same as `frequency_profile` with the `Start` and `Stop` entries removed.
/// Frequencies are still relative to the full stream.
pub fn rank_amino_acids(labels: &[Label]) -> Vec<FrequencyEntry> {
    frequency_profile(labels)
        .into_iter()
        .filter(|entry| !is_structural(&entry.label))
        .collect()
}

/// Every distinct label across all samples, sorted alphabetically
pub fn global_label_set(gene_list: &[ProteinList]) -> Vec<Label> {
    let labels: BTreeSet<&Label> = gene_list
        .iter()
        .flat_map(|proteins| proteins.iter())
        .flat_map(|protein| protein.iter())
        .collect();
    labels.into_iter().cloned().collect()
}

/// Frequencies of a sample lined up against a label set
///
/// # Arguments
/// - `label_set` - Labels to report, in output order
/// - `proteins` - Proteins of one sample
///
/// # Returns
/// One frequency per label, 0.0 for labels the sample lacks
pub fn aligned_frequency_vector(label_set: &[Label], proteins: &[Protein]) -> Vec<f64> {
    let labels = flatten(proteins);
    let counts = count_occurrences(&labels);
    let total = labels.len();
    label_set
        .iter()
        .map(|label| match counts.get(label) {
            Some(count) if total > 0 => *count as f64 / total as f64,
            _ => 0.0,
        })
        .collect()
}

/// Aligned frequency vectors for every sample, ready for charting
///
/// Samples are independent, so they are computed in parallel.
pub fn chart_data(label_set: &[Label], gene_list: &[ProteinList]) -> Vec<Vec<f64>> {
    debug!(
        "Aligning {} samples over {} labels",
        gene_list.len(),
        label_set.len()
    );
    gene_list
        .par_iter()
        .map(|proteins| aligned_frequency_vector(label_set, proteins))
        .collect()
}
