//! Module for comparing the proteins of two samples
use std::collections::{BTreeSet, HashSet};

use crate::common::{Label, Protein};

/// Proteins found in both samples
///
/// Proteins are compared by their full label sequence. Duplicates collapse,
/// so a protein appears once no matter how often either sample has it.
///
/// # Arguments
/// - `first` - Proteins of the first sample
/// - `second` - Proteins of the second sample
///
/// # Returns
/// Shared proteins, ordered by label sequence
pub fn common_proteins(first: &[Protein], second: &[Protein]) -> BTreeSet<Protein> {
    let in_second: HashSet<&Protein> = second.iter().collect();
    first
        .iter()
        .filter(|protein| in_second.contains(protein))
        .cloned()
        .collect()
}

/// Concatenate a sample's proteins into one label stream
///
/// No separator is added; each complete protein still ends with `Stop`.
pub fn flatten(proteins: &[Protein]) -> Vec<Label> {
    proteins.concat()
}
