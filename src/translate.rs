//! Module for translating DNA into proteins
use log::{debug, warn};

use crate::codon::{is_stop_codon, CodonTable, START_CODON};
use crate::common::{Codon, Protein, ProteinList, METHIONINE, START};
use crate::error::{ProtSeqError, Result};

/// Start codon as it appears in DNA
const START_DNA: [char; 3] = ['A', 'T', 'G'];

/// Proteins found by scanning a whole DNA sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Synthesis {
    /// Proteins in the order they were found
    pub proteins: ProteinList,

    /// Bases which were not part of any protein
    pub unused_bases: usize,
}

/// Transcribes a single DNA base to RNA
///
/// Only `T` changes; anything else passes through untouched.
pub fn transcribe_base(base: char) -> char {
    match base {
        'T' => 'U',
        _ => base,
    }
}

/// Group bases into RNA codons from `start`, stopping after the first stop codon
fn codons_from(bases: &[char], start: usize) -> Vec<Codon> {
    let mut codons = Vec::new();
    if start >= bases.len() {
        return codons;
    }
    // Trailing partial codon is dropped by chunks_exact
    for chunk in bases[start..].chunks_exact(3) {
        let codon: Codon = chunk.iter().map(|base| transcribe_base(*base)).collect();
        let stop = is_stop_codon(&codon);
        codons.push(codon);
        if stop {
            break;
        }
    }
    codons
}

/// Convert DNA into RNA codons
///
/// # Arguments
/// - `dna` - DNA sequence over A/C/G/T
/// - `start_index` - Index of the first base of the first codon
///
/// # Returns
/// Codons up to and including the first stop codon. Empty if `start_index`
/// leaves fewer than 3 bases
pub fn dna_to_codons(dna: &str, start_index: usize) -> Vec<Codon> {
    let bases: Vec<char> = dna.chars().collect();
    codons_from(&bases, start_index)
}

/// Translate codons into a protein
///
/// Every codon must be in the table. A leading start codon is reported as
/// `Start` even when the table calls it methionine; past the first position
/// a `Start` label is read as methionine.
///
/// # Arguments
/// - `codons` - RNA codons, in reading order
/// - `table` - Codon table to look each codon up in
///
/// # Returns
/// One label per codon, or `UnknownCodon` if a codon is not in the table
pub fn translate(codons: &[Codon], table: &CodonTable) -> Result<Protein> {
    codons
        .iter()
        .enumerate()
        .map(|(idx, codon)| {
            let label = table
                .get(codon)
                .ok_or_else(|| ProtSeqError::UnknownCodon(codon.clone()))?;
            let label = if idx == 0 && codon == START_CODON && label == METHIONINE {
                START
            } else if idx > 0 && label == START {
                METHIONINE
            } else {
                label
            };
            Ok(label.to_string())
        })
        .collect()
}

/// Find every protein in a DNA sequence
///
/// Walks the sequence base by base. Each `ATG` starts a protein which runs
/// to its stop codon (or the end of the sequence); scanning resumes after
/// the protein's last codon. Any base not covered by a protein is unused.
///
/// # Arguments
/// - `dna` - DNA sequence over A/C/G/T
/// - `table` - Codon table to translate with
pub fn synthesize_proteins(dna: &str, table: &CodonTable) -> Result<Synthesis> {
    let bases: Vec<char> = dna.chars().collect();

    let mut proteins = Vec::new();
    let mut unused_bases = 0;
    let mut idx = 0;
    while idx < bases.len() {
        if bases[idx..].starts_with(&START_DNA) {
            let codons = codons_from(&bases, idx);
            idx += 3 * codons.len();
            proteins.push(translate(&codons, table)?);
        } else {
            unused_bases += 1;
            idx += 1;
        }
    }

    debug!(
        "Synthesized {} proteins from {} bases",
        proteins.len(),
        bases.len()
    );
    if proteins.is_empty() && !bases.is_empty() {
        warn!("No start codon found in {} bases", bases.len());
    }
    Ok(Synthesis {
        proteins,
        unused_bases,
    })
}
