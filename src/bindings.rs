//! Python wrappers around the library functions
//!
//! Python hands over owned lists, so each wrapper takes owned values and
//! forwards to the slice based Rust API.
#![cfg(not(tarpaulin_include))]
use pyo3::prelude::*;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::codon::{build_codon_table, codon_table, CodonTable};
use crate::common::{
    configure_threads, Codon, DifferenceEntry, FrequencyEntry, GeneList, Label, Protein,
    ProteinList,
};
use crate::compare::{common_proteins, flatten};
use crate::difference::{edge_coloring, find_differences_with, DifferenceOptions};
use crate::frequency::{
    aligned_frequency_vector, chart_data, count_occurrences, frequency_profile, global_label_set,
    rank_amino_acids,
};
use crate::sequence::read_sequence;
use crate::translate::{dna_to_codons, synthesize_proteins, translate};

#[pyfunction]
#[pyo3(name = "build_codon_table")]
/// Build the standard codon table
pub fn py_build_codon_table() -> CodonTable {
    build_codon_table()
}

#[pyfunction]
#[pyo3(name = "dna_to_codons", signature = (dna, start_index=0))]
/// Convert DNA into RNA codons, stopping after the first stop codon
pub fn py_dna_to_codons(dna: &str, start_index: usize) -> Vec<Codon> {
    dna_to_codons(dna, start_index)
}

#[pyfunction]
#[pyo3(name = "translate", signature = (codons, table=None))]
/// Translate codons into a protein. Uses the standard table if none is given
pub fn py_translate(codons: Vec<Codon>, table: Option<PyRef<'_, CodonTable>>) -> PyResult<Protein> {
    let protein = match table {
        Some(table) => translate(&codons, &table)?,
        None => translate(&codons, codon_table())?,
    };
    Ok(protein)
}

#[pyfunction]
#[pyo3(name = "synthesize_proteins", signature = (dna, table=None))]
/// Find every protein in a DNA sequence
///
/// Returns a tuple of (proteins, unused base count)
pub fn py_synthesize_proteins(
    dna: &str,
    table: Option<PyRef<'_, CodonTable>>,
) -> PyResult<(ProteinList, usize)> {
    let synthesis = match table {
        Some(table) => synthesize_proteins(dna, &table)?,
        None => synthesize_proteins(dna, codon_table())?,
    };
    Ok((synthesis.proteins, synthesis.unused_bases))
}

#[pyfunction]
#[pyo3(name = "common_proteins")]
/// Proteins present in both samples
pub fn py_common_proteins(first: ProteinList, second: ProteinList) -> Vec<Protein> {
    common_proteins(&first, &second).into_iter().collect()
}

#[pyfunction]
#[pyo3(name = "flatten")]
/// Concatenate a sample's proteins into one label list
pub fn py_flatten(proteins: ProteinList) -> Vec<Label> {
    flatten(&proteins)
}

#[pyfunction]
#[pyo3(name = "count_occurrences")]
/// Number of times each label occurs
pub fn py_count_occurrences(labels: Vec<Label>) -> HashMap<Label, usize> {
    count_occurrences(&labels)
}

#[pyfunction]
#[pyo3(name = "frequency_profile")]
/// Relative frequency of every label, ascending
pub fn py_frequency_profile(labels: Vec<Label>) -> Vec<FrequencyEntry> {
    frequency_profile(&labels)
}

#[pyfunction]
#[pyo3(name = "rank_amino_acids")]
/// Relative frequency of every amino acid, ascending, without Start/Stop
pub fn py_rank_amino_acids(labels: Vec<Label>) -> Vec<FrequencyEntry> {
    rank_amino_acids(&labels)
}

#[pyfunction]
#[pyo3(name = "global_label_set")]
/// Sorted distinct labels across all samples
pub fn py_global_label_set(gene_list: GeneList) -> Vec<Label> {
    global_label_set(&gene_list)
}

#[pyfunction]
#[pyo3(name = "aligned_frequency_vector")]
/// Frequencies of one sample in label set order
pub fn py_aligned_frequency_vector(label_set: Vec<Label>, proteins: ProteinList) -> Vec<f64> {
    aligned_frequency_vector(&label_set, &proteins)
}

#[pyfunction]
#[pyo3(name = "chart_data")]
/// Aligned frequency vectors for every sample
pub fn py_chart_data(py: Python<'_>, label_set: Vec<Label>, gene_list: GeneList) -> Vec<Vec<f64>> {
    py.allow_threads(|| chart_data(&label_set, &gene_list))
}

#[pyfunction]
#[pyo3(name = "find_differences", signature = (first, second, options=None))]
/// Amino acids whose frequency differs between two samples, largest first
pub fn py_find_differences(
    first: ProteinList,
    second: ProteinList,
    options: Option<PyRef<'_, DifferenceOptions>>,
) -> Vec<DifferenceEntry> {
    match options {
        Some(options) => find_differences_with(&first, &second, &options),
        None => find_differences_with(&first, &second, &DifferenceOptions::default()),
    }
}

#[pyfunction]
#[pyo3(name = "edge_coloring")]
/// "black" for each label with a difference, "white" otherwise
pub fn py_edge_coloring(label_set: Vec<Label>, differences: Vec<DifferenceEntry>) -> Vec<String> {
    edge_coloring(&label_set, &differences)
        .iter()
        .map(|color| color.to_string())
        .collect()
}

#[pyfunction]
#[pyo3(name = "read_sequence")]
/// Read a DNA sequence from a text or GenBank file
pub fn py_read_sequence(path: PathBuf) -> PyResult<String> {
    Ok(read_sequence(path)?)
}

#[pyfunction]
#[pyo3(signature = (num_threads=None))]
/// Set up the number of threads to use for parallel operations
/// If None, use the default number of threads (usually the number of cores)
///
/// Only call this function to use less cores than the default. Note that
/// it should be called before **any** other function in the program, and
/// should not be called more than once.
///
/// # Arguments
/// * `num_threads` - Number of threads to use for parallel operations
pub fn thread_setup(num_threads: Option<usize>) -> PyResult<()> {
    Ok(configure_threads(num_threads)?)
}
