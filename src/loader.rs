use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::trie::PrefixIndex;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open word list {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read line {line} of word list")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Builds an index from one word per line. Blank lines are skipped.
pub fn load_from_reader(reader: impl BufRead) -> Result<PrefixIndex, LoadError> {
    let mut index = PrefixIndex::new();
    let mut blank = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read { line: i + 1, source })?;
        let word = normalize(&line);
        if word.is_empty() {
            blank += 1;
            continue;
        }
        index.insert(&word);
    }

    if blank > 0 {
        debug!("Skipped {blank} blank lines");
    }
    info!("Loaded {} words", index.len());
    Ok(index)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<PrefixIndex, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Reading word list from {}", path.display());
    load_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  United Kingdom\r"), "united kingdom");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_load_trims_and_lowercases() {
        // Arrange
        let input = Cursor::new(" France \nGERMANY\r\nghana\n");

        // Act
        let index = load_from_reader(input).unwrap();

        // Assert
        assert_eq!(index.len(), 3);
        assert_eq!(index.query(""), vec!["france", "germany", "ghana"]);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let input = Cursor::new("\nfrance\n   \n\nfrancia\n\n");

        let index = load_from_reader(input).unwrap();

        // a blank line must not mark the root as a word
        assert_eq!(index.len(), 2);
        assert_eq!(index.query(""), vec!["france", "francia"]);
    }

    #[test]
    fn test_load_empty_input() {
        let index = load_from_reader(Cursor::new("")).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_load_invalid_utf8_reports_line() {
        let input = Cursor::new(b"france\n\xff\xfe\n".to_vec());

        let err = load_from_reader(input).unwrap_err();

        assert!(matches!(err, LoadError::Read { line: 2, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_from_path("no/such/countries.txt").unwrap_err();

        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("countries.txt"));
    }

    #[test]
    fn test_load_bundled_countries() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/countries.txt");

        let index = load_from_path(path).unwrap();

        assert!(index.len() > 190);
        assert_eq!(index.query("france"), vec!["france"]);
        assert_eq!(index.query("fr"), vec!["france"]);
    }
}
