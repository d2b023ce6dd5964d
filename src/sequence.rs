//! Module for reading DNA sequences from disk
use std::fs::{self, File};
use std::path::Path;

use gb_io::reader::SeqReader;
use log::{debug, warn};

use crate::error::{ProtSeqError, Result};

/// Extensions which are read as GenBank rather than plain text
const GENBANK_EXTENSIONS: [&str; 4] = ["gb", "gbk", "gbff", "genbank"];

/// Whether a path looks like a GenBank file
fn is_genbank(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => GENBANK_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Sequence of the first record in a GenBank file
fn read_genbank(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let seq = match SeqReader::new(file).next() {
        Some(Ok(seq)) => seq,
        Some(Err(e)) => {
            return Err(ProtSeqError::Parse(format!(
                "Problem reading {}: {:?}",
                path.display(),
                e
            )))
        }
        None => {
            return Err(ProtSeqError::Parse(format!(
                "No records in {}",
                path.display()
            )))
        }
    };
    String::from_utf8(seq.seq)
        .map_err(|e| ProtSeqError::Parse(format!("Problem reading sequence data: {:?}", e)))
}

/// Read a DNA sequence from disk
///
/// GenBank files (`.gb`, `.gbk`, `.gbff`, `.genbank`) use the first record's
/// sequence. Anything else is read as plain text with all whitespace removed.
/// Either way the sequence is returned upper case.
///
/// # Arguments
/// - `path` - Path to the sequence file
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let raw = if is_genbank(path) {
        read_genbank(path)?
    } else {
        fs::read_to_string(path)?
    };
    let sequence: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let unexpected = sequence.chars().filter(|c| !"ACGT".contains(*c)).count();
    if unexpected > 0 {
        warn!(
            "{} has {} bases other than A/C/G/T; they are passed through untranscribed",
            path.display(),
            unexpected
        );
    }
    debug!("Read {} bases from {}", sequence.len(), path.display());
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("protseq-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_plain_text() {
        let path = scratch_file("plain.txt", "atggatggac\nTCTAA\r\n");
        assert_eq!(read_sequence(&path).unwrap(), "ATGGATGGACTCTAA");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unexpected_bases_kept() {
        let path = scratch_file("ambiguous.txt", "atgNNr\nuaa\n");
        assert_eq!(read_sequence(&path).unwrap(), "ATGNNRUAA");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_empty_file() {
        let path = scratch_file("empty.txt", "");
        assert_eq!(read_sequence(&path).unwrap(), "");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_genbank() {
        assert_eq!(
            read_sequence("reference/TEST-GENE.gbk").unwrap(),
            "ATGGATGGACTCTAACTCATGCCCTTTTAG"
        );
    }

    #[test]
    fn test_reference_text() {
        let dna = read_sequence("reference/test-gene.txt").unwrap();
        assert_eq!(dna.len(), 36);
        assert_eq!(&dna[..10], "CCTATGGATG");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_sequence("not/a/path.txt"),
            Err(ProtSeqError::Io(_))
        ));
        assert!(matches!(
            read_sequence("not/a/path.gbk"),
            Err(ProtSeqError::Io(_))
        ));
    }

    #[test]
    fn test_genbank_detection() {
        assert!(is_genbank(Path::new("a/b.gbk")));
        assert!(is_genbank(Path::new("b.GB")));
        assert!(is_genbank(Path::new("b.gbff")));
        assert!(!is_genbank(Path::new("b.txt")));
        assert!(!is_genbank(Path::new("gbk")));
    }
}
