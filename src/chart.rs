//! Module for preparing frequency data for an external chart renderer
use log::warn;

use crate::common::{DifferenceEntry, Label, ProteinList};
use crate::difference::{edge_coloring, EdgeColor};
use crate::error::{ProtSeqError, Result};
use crate::frequency::{chart_data, global_label_set};

/// Frequency table aligned across samples
///
/// Fields are only set through `new` and `with_edge_colors`, so every series
/// and the edge colouring always have one entry per label.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    /// Sorted labels, one per chart column
    labels: Vec<Label>,

    /// Display name of each sample
    sample_names: Vec<String>,

    /// Per sample frequencies, each aligned to `labels`
    series: Vec<Vec<f64>>,

    /// Optional highlight per label
    edge_colors: Option<Vec<EdgeColor>>,
}

impl ChartData {
    /// Align the frequencies of several samples
    ///
    /// # Arguments
    /// - `sample_names` - Display name for each sample
    /// - `gene_list` - Proteins of each sample, same order as the names
    pub fn new(sample_names: Vec<String>, gene_list: &[ProteinList]) -> Result<Self> {
        if sample_names.len() != gene_list.len() {
            return Err(ProtSeqError::InvalidInput(format!(
                "{} sample names given for {} samples",
                sample_names.len(),
                gene_list.len()
            )));
        }
        if gene_list.is_empty() {
            return Err(ProtSeqError::InvalidInput(
                "at least one sample is needed for a chart".to_string(),
            ));
        }
        for (name, proteins) in sample_names.iter().zip(gene_list.iter()) {
            if proteins.is_empty() {
                warn!("Sample {} has no proteins; its frequencies are all 0", name);
            }
        }
        let labels = global_label_set(gene_list);
        let series = chart_data(&labels, gene_list);
        Ok(ChartData {
            labels,
            sample_names,
            series,
            edge_colors: None,
        })
    }

    /// Sorted labels, one per chart column
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }

    /// Per sample frequencies, each aligned to `labels`
    pub fn series(&self) -> &[Vec<f64>] {
        &self.series
    }

    pub fn edge_colors(&self) -> Option<&[EdgeColor]> {
        self.edge_colors.as_deref()
    }

    /// Highlight the labels which differ between two samples
    pub fn with_edge_colors(mut self, differences: &[DifferenceEntry]) -> Self {
        self.edge_colors = Some(edge_coloring(&self.labels, differences));
        self
    }

    /// Tab separated table, one row per label
    pub fn to_tsv(&self) -> String {
        let mut out = String::from("label");
        for name in self.sample_names.iter() {
            out.push('\t');
            out.push_str(name);
        }
        if self.edge_colors.is_some() {
            out.push_str("\tedge");
        }
        out.push('\n');

        for (idx, label) in self.labels.iter().enumerate() {
            out.push_str(label);
            for series in self.series.iter() {
                match series.get(idx) {
                    Some(frequency) => out.push_str(&format!("\t{:.4}", frequency)),
                    None => out.push('\t'),
                }
            }
            if let Some(colors) = &self.edge_colors {
                out.push('\t');
                if let Some(color) = colors.get(idx) {
                    out.push_str(&color.to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}
