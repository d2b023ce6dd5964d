//! Protseq, protein sequencing and comparison in Rust.
//!
//! This library provides a set of tools for comparing the proteins of gene samples, including:
//! - A standard RNA codon table
//! - DNA to RNA to protein translation
//! - Shared proteins between samples
//! - Amino acid frequency profiles and cross sample differences
//! - Frequency tables aligned across samples, ready for charting
//!
//! # Example
//! ```no_run
//! use protseq::codon::codon_table;
//! use protseq::difference::find_differences;
//! use protseq::sequence::read_sequence;
//! use protseq::translate::synthesize_proteins;
//!
//! let human = read_sequence("some/path/to/human_p53.txt").unwrap();
//! let elephant = read_sequence("some/path/to/elephant_p53.txt").unwrap();
//! let human = synthesize_proteins(&human, codon_table()).unwrap();
//! let elephant = synthesize_proteins(&elephant, codon_table()).unwrap();
//!
//! for difference in find_differences(&human.proteins, &elephant.proteins) {
//!     println!(
//!         "{}: {:.2}% vs {:.2}%",
//!         difference.label,
//!         difference.frequency_a * 100.0,
//!         difference.frequency_b * 100.0
//!     );
//! }
//! ```
//!
//! Also provides an interface to this library as a Python module using PyO3.
use pyo3::prelude::*;

pub mod bindings;
pub mod chart;
pub mod codon;
pub mod common;
pub mod compare;
pub mod difference;
pub mod error;
pub mod frequency;
pub mod sequence;
pub mod translate;

/// A Python module implemented in Rust.
#[cfg(not(tarpaulin_include))]
#[pymodule]
fn protseq(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<codon::CodonTable>()?;

    m.add_class::<common::FrequencyEntry>()?;
    m.add_class::<common::DifferenceEntry>()?;

    m.add_class::<difference::DifferenceOptions>()?;
    m.add_class::<difference::EdgeColor>()?;

    m.add_function(wrap_pyfunction!(bindings::py_build_codon_table, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_dna_to_codons, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_translate, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_synthesize_proteins, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_common_proteins, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_flatten, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_count_occurrences, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_frequency_profile, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_rank_amino_acids, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_global_label_set, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_aligned_frequency_vector, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_chart_data, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_find_differences, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_edge_coloring, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::py_read_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::thread_setup, m)?)?;

    Ok(())
}
