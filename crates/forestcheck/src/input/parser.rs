//! CSV/TSV loading with delimiter detection.
//!
//! The loader maps raw fields onto [`Cell::Str`] and common missing-value
//! spellings onto [`Cell::Null`]; turning numeric-looking text into numbers
//! is the job of the pre-flight checks, not the loader.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::InputError;

use super::table::{Cell, DataTable};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the input has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited text into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file into a table.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<DataTable, InputError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|e| InputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_bytes(&contents)
    }

    /// Parse in-memory text into a table.
    pub fn parse_str(&self, text: &str) -> Result<DataTable, InputError> {
        self.parse_bytes(text.as_bytes())
    }

    fn parse_bytes(&self, bytes: &[u8]) -> Result<DataTable, InputError> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.trim().to_string()).collect()
        } else {
            Vec::new()
        };

        let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if headers.is_empty() {
                // Headerless input: name columns by position.
                headers = (0..record.len()).map(|i| format!("column_{}", i + 1)).collect();
                columns = vec![Vec::new(); headers.len()];
            }

            // Short records pad with nulls, extra fields are dropped.
            for (idx, column) in columns.iter_mut().enumerate() {
                column.push(parse_cell(record.get(idx).unwrap_or("")));
            }
        }

        if headers.is_empty() {
            return Err(InputError::EmptyData("No columns found".to_string()));
        }
        if columns.iter().all(Vec::is_empty) {
            return Err(InputError::EmptyData("No data rows found".to_string()));
        }

        let mut table = DataTable::new();
        for (name, cells) in headers.into_iter().zip(columns) {
            table.insert_column(name, cells);
        }
        Ok(table)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Load one raw field, mapping missing-value spellings to null.
fn parse_cell(value: &str) -> Cell {
    if is_null_text(value) {
        Cell::Null
    } else {
        Cell::Str(value.to_string())
    }
}

/// True if a raw field represents a missing value.
fn is_null_text(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed == "."
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8, InputError> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|line| line.ok())
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(InputError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best: Option<(u8, usize)> = None;
    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first = counts[0];
        if first == 0 {
            continue;
        }

        // Consistent counts across lines outrank raw frequency; tabs get a
        // small edge since they rarely appear inside real values.
        let consistent = counts.iter().all(|&c| c == first);
        let score = if consistent { first * 1000 } else { first } + usize::from(delim == b'\t');

        if best.is_none_or(|(_, s)| score > s) {
            best = Some((delim, score));
        }
    }

    match best {
        Some((delim, _)) => Ok(delim),
        None => Err(InputError::InvalidDelimiter(
            "no delimiter candidate found in the first lines".to_string(),
        )),
    }
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
