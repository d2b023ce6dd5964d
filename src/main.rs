use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::SystemTime;

use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};

use protseq::chart::ChartData;
use protseq::codon::{codon_table, CodonTable};
use protseq::common::{configure_threads, ProteinList};
use protseq::compare::common_proteins;
use protseq::difference::{find_differences_with, DifferenceOptions};
use protseq::error::{ProtSeqError, Result};
use protseq::sequence::read_sequence;
use protseq::translate::synthesize_proteins;

#[derive(Parser, Debug)]
#[command(name = "protseq", version, about = "Compare the proteins of gene samples")]
struct Cli {
    /// Number of threads for per-sample work. Defaults to the number of cores
    #[arg(short, long, global = true)]
    threads: Option<usize>,

    /// JSON codon table to use instead of the standard one
    #[arg(long, global = true)]
    codon_table: Option<PathBuf>,

    /// Log more detail (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the proteins found in a sequence
    Translate {
        /// DNA sequence, plain text or GenBank
        file: PathBuf,
    },

    /// Compare the proteins of two sequences
    Compare {
        /// First DNA sequence
        first: PathBuf,

        /// Second DNA sequence
        second: PathBuf,

        /// Only report amino acids present in both samples which differ by more than 2%
        #[arg(long)]
        significant: bool,

        /// Minimum frequency difference to report
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Print amino acid frequencies of each sequence as a tab separated table
    Chart {
        /// DNA sequences
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Display name for each sequence. Defaults to the file stem
        #[arg(short, long = "name")]
        names: Vec<String>,
    },
}

/// Read a sequence and pull out its proteins
fn load_proteins(path: &Path, table: &CodonTable) -> Result<ProteinList> {
    let dna = read_sequence(path)?;
    let synthesis = synthesize_proteins(&dna, table)?;
    info!(
        "{}: {} proteins, {} unused bases",
        path.display(),
        synthesis.proteins.len(),
        synthesis.unused_bases
    );
    Ok(synthesis.proteins)
}

fn sample_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn run(cli: Cli) -> Result<()> {
    // Rayon sizes its default pool to the number of cores on first use
    if cli.threads.is_some() {
        configure_threads(cli.threads)?;
    }
    let custom_table = match &cli.codon_table {
        Some(path) => Some(CodonTable::from_json_file(path)?),
        None => None,
    };
    let table = custom_table.as_ref().unwrap_or(codon_table());

    match cli.command {
        Command::Translate { file } => {
            let dna = read_sequence(&file)?;
            let synthesis = synthesize_proteins(&dna, table)?;
            for protein in synthesis.proteins.iter() {
                println!("{}", protein.join("-"));
            }
            println!(
                "\n{} proteins, {} unused bases",
                synthesis.proteins.len(),
                synthesis.unused_bases
            );
        }
        Command::Compare {
            first,
            second,
            significant,
            threshold,
        } => {
            let first_proteins = load_proteins(&first, table)?;
            let second_proteins = load_proteins(&second, table)?;

            let mut options = if significant {
                DifferenceOptions::significant()
            } else {
                DifferenceOptions::default()
            };
            if let Some(threshold) = threshold {
                options.threshold = threshold;
            }

            let shared = common_proteins(&first_proteins, &second_proteins);
            println!("The following proteins occurred in both DNA Sequences:");
            for protein in shared.iter() {
                println!("{}", protein.join("-"));
            }

            let differences = find_differences_with(&first_proteins, &second_proteins, &options);
            println!("\nThe following amino acids occurred at very different rates:");
            println!(
                "{:<8}{:>12}{:>12}",
                "Label",
                sample_name(&first),
                sample_name(&second)
            );
            for difference in differences.iter() {
                println!(
                    "{:<8}{:>11.2}%{:>11.2}%",
                    difference.label,
                    difference.frequency_a * 100.0,
                    difference.frequency_b * 100.0
                );
            }
        }
        Command::Chart { files, names } => {
            if !names.is_empty() && names.len() != files.len() {
                return Err(ProtSeqError::InvalidInput(format!(
                    "{} names given for {} files",
                    names.len(),
                    files.len()
                )));
            }
            let names = if names.is_empty() {
                files.iter().map(|file| sample_name(file)).collect()
            } else {
                names
            };
            let gene_list = files
                .iter()
                .map(|file| load_proteins(file, table))
                .collect::<Result<Vec<ProteinList>>>()?;

            let mut chart = ChartData::new(names, &gene_list)?;
            if gene_list.len() == 2 {
                let differences = find_differences_with(
                    &gene_list[0],
                    &gene_list[1],
                    &DifferenceOptions::default(),
                );
                chart = chart.with_edge_colors(&differences);
            }
            print!("{}", chart.to_tsv());
        }
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let start = SystemTime::now();
    let result = run(cli);
    if let Ok(elapsed) = start.elapsed() {
        info!("Took {:?}", elapsed);
    }
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::parse_from([
            "protseq",
            "-t",
            "2",
            "compare",
            "a.txt",
            "b.txt",
            "--significant",
        ]);
        assert_eq!(cli.threads, Some(2));
        match cli.command {
            Command::Compare {
                first,
                significant,
                threshold,
                ..
            } => {
                assert_eq!(first, PathBuf::from("a.txt"));
                assert!(significant);
                assert_eq!(threshold, None);
            }
            other => panic!("Expected compare, got {:?}", other),
        }
    }

    #[test]
    fn test_run_translate() {
        let cli = Cli::parse_from(["protseq", "translate", "reference/test-gene.txt"]);
        assert!(run(cli).is_ok());

        let cli = Cli::parse_from([
            "protseq",
            "translate",
            "reference/test-gene.txt",
            "--codon-table",
            "reference/standard-codons.json",
        ]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_run_errors() {
        let cli = Cli::parse_from(["protseq", "translate", "reference/missing.txt"]);
        assert!(matches!(run(cli), Err(ProtSeqError::Io(_))));

        let cli = Cli::parse_from([
            "protseq",
            "chart",
            "reference/test-gene.txt",
            "reference/TEST-GENE.gbk",
            "-n",
            "only-one",
        ]);
        assert!(matches!(run(cli), Err(ProtSeqError::InvalidInput(_))));
    }

    #[test]
    fn test_run_compare_and_chart() {
        let cli = Cli::parse_from([
            "protseq",
            "compare",
            "reference/test-gene.txt",
            "reference/TEST-GENE.gbk",
            "--significant",
        ]);
        assert!(run(cli).is_ok());

        let cli = Cli::parse_from([
            "protseq",
            "chart",
            "reference/test-gene.txt",
            "reference/TEST-GENE.gbk",
        ]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_sample_name() {
        assert_eq!(sample_name(Path::new("data/human_p53.txt")), "human_p53");
    }
}
