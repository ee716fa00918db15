//! Word list loading.
//!
//! Words come either from a `words.json` array or from the delimited source
//! file it is generated from (header row plus six columns per entry, in the
//! order japanese, yomigana, japanese_meaning, chinese, pinyin,
//! chinese_meaning). Rows that do not have exactly six non-empty columns are
//! rejected instead of producing half-filled entries.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::WordEntry;

/// Number of columns in a word-list row
pub const CSV_COLUMNS: usize = 6;

/// Sample list compiled into the binary, used when no words file is configured.
pub const BUNDLED_WORDS_CSV: &str = include_str!("../../data/words.csv");

/// Error loading a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed row {row}: {reason}")]
    Format { row: u64, reason: String },
}

/// Anything that can supply the word list.
pub trait WordSource {
    fn load(&self) -> Result<Vec<WordEntry>, LoadError>;

    /// Short description for log messages
    fn describe(&self) -> String;
}

/// A `words.json` file
#[derive(Debug, Clone)]
pub struct JsonFile(pub PathBuf);

/// A delimited source file with a header row
#[derive(Debug, Clone)]
pub struct CsvFile(pub PathBuf);

/// The sample list shipped with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledWords;

impl WordSource for JsonFile {
    fn load(&self) -> Result<Vec<WordEntry>, LoadError> {
        parse_json(&read_file(&self.0)?)
    }

    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

impl WordSource for CsvFile {
    fn load(&self) -> Result<Vec<WordEntry>, LoadError> {
        parse_csv(&read_file(&self.0)?)
    }

    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

impl WordSource for BundledWords {
    fn load(&self) -> Result<Vec<WordEntry>, LoadError> {
        parse_csv(BUNDLED_WORDS_CSV)
    }

    fn describe(&self) -> String {
        "bundled word list".to_string()
    }
}

impl WordSource for Vec<WordEntry> {
    fn load(&self) -> Result<Vec<WordEntry>, LoadError> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory words", self.len())
    }
}

/// Pick a source by file extension: `.json` is read as JSON, anything else as CSV.
pub fn source_for_path(path: &Path) -> Box<dyn WordSource> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Box::new(JsonFile(path.to_path_buf())),
        _ => Box::new(CsvFile(path.to_path_buf())),
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse delimited text. The first row is a header and is discarded.
pub fn parse_csv(text: &str) -> Result<Vec<WordEntry>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut words = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1
        let row = record
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 2);

        // Whitespace-only lines count as blank
        if record.iter().all(str::is_empty) {
            continue;
        }

        if record.len() != CSV_COLUMNS {
            return Err(LoadError::Format {
                row,
                reason: format!("expected {} columns, found {}", CSV_COLUMNS, record.len()),
            });
        }

        let word = WordEntry::new(
            &record[0], &record[1], &record[2], &record[3], &record[4], &record[5],
        );
        validate_word(&word, row)?;
        words.push(word);
    }

    Ok(words)
}

/// Parse a JSON array of entries.
pub fn parse_json(text: &str) -> Result<Vec<WordEntry>, LoadError> {
    let raw: Vec<WordEntry> = serde_json::from_str(text)?;

    let mut words = Vec::with_capacity(raw.len());
    for (i, entry) in raw.iter().enumerate() {
        let word = entry.normalized();
        validate_word(&word, i as u64 + 1)?;
        words.push(word);
    }

    Ok(words)
}

fn validate_word(word: &WordEntry, row: u64) -> Result<(), LoadError> {
    match word.missing_field() {
        Some(field) => Err(LoadError::Format {
            row,
            reason: format!("empty field '{}'", field),
        }),
        None => Ok(()),
    }
}

/// Write entries as the pretty-printed `words.json` format.
pub fn write_json(words: &[WordEntry], path: &Path) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(words)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| LoadError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Offline conversion of a delimited word file into `words.json`.
pub fn convert_csv_to_json(input: &Path, output: &Path) -> Result<usize, LoadError> {
    let words = CsvFile(input.to_path_buf()).load()?;
    write_json(&words, output)?;
    Ok(words.len())
}

/// In-memory ordered word list, filled once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<WordEntry>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words(words: Vec<WordEntry>) -> Self {
        Self { words }
    }

    /// Replace the contents from `source`. On failure the store is left empty.
    pub fn load(&mut self, source: &dyn WordSource) -> Result<usize, LoadError> {
        match source.load() {
            Ok(words) => {
                tracing::info!("Loaded {} words from {}", words.len(), source.describe());
                self.words = words;
                Ok(self.words.len())
            }
            Err(e) => {
                tracing::error!("Failed to load words from {}: {}", source.describe(), e);
                self.words.clear();
                Err(e)
            }
        }
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
