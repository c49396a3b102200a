//! Error types for the forestcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`PreflightError`].
///
/// Callers that map failures onto exception types or exit codes switch on
/// this instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong container shape, non-numeric values, or inconsistent argument pairing.
    SchemaType,
    /// Two related sequences disagree in length.
    LengthMismatch,
    /// A referenced column or group value does not exist.
    FieldExistence,
}

/// Validation failure raised by the pre-flight checks.
///
/// The `Display` text of each variant is fixed and part of the public
/// contract; downstream tooling matches on it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreflightError {
    /// The supplied table is not a usable tabular structure.
    #[error("Expect data as DataTable")]
    NotTabular,

    /// The estimate column holds a value that is neither numeric nor
    /// parseable as a number.
    #[error("Estimates should be float or int")]
    EstimateNotNumeric,

    /// The CI lower-limit column holds a non-numeric, non-parseable value.
    #[error("CI lowerlimit values should be float or int")]
    LowerLimitNotNumeric,

    /// The CI higher-limit column holds a non-numeric, non-parseable value.
    #[error("CI higherlimit values should be float or int")]
    HigherLimitNotNumeric,

    /// Exactly one of the paired CI bound columns was supplied.
    #[error("'{absent}' is None. '{supplied}' should also be None.")]
    UnpairedCiBound {
        absent: &'static str,
        supplied: &'static str,
    },

    /// Two related sequences disagree in length.
    #[error("Iterables not of the same length.")]
    LengthMismatch,

    /// A referenced column is in neither the table nor the derived-column
    /// allow-list.
    #[error("the field {0} is not found in dataframe.")]
    FieldNotFound(String),

    /// Left annotation headers were supplied without annotation columns.
    #[error("Annotation headers are provided but no columns provided ('annote').")]
    AnnoteHeadersWithoutColumns,

    /// Right annotation headers were supplied without annotation columns.
    #[error("Right annotation headers are provided but no columns provided ('rightannote').")]
    RightAnnoteHeadersWithoutColumns,

    /// A group ordering was supplied without a grouping column.
    #[error("Group ordering ('group_order') provided but no group column provided ('groupvar').")]
    OrderWithoutGroupColumn,

    /// A group named in the ordering does not occur in the grouping column.
    #[error("Groups specified in `group_order` should exist in the data.")]
    UnknownGroup,
}

impl PreflightError {
    /// Classify this error into one of the three pre-flight failure kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotTabular
            | Self::EstimateNotNumeric
            | Self::LowerLimitNotNumeric
            | Self::HigherLimitNotNumeric
            | Self::UnpairedCiBound { .. }
            | Self::AnnoteHeadersWithoutColumns
            | Self::RightAnnoteHeadersWithoutColumns
            | Self::OrderWithoutGroupColumn => ErrorKind::SchemaType,
            Self::LengthMismatch => ErrorKind::LengthMismatch,
            Self::FieldNotFound(_) | Self::UnknownGroup => ErrorKind::FieldExistence,
        }
    }
}

/// Error reading delimited text into a [`DataTable`](crate::input::DataTable).
///
/// Loader failures are kept apart from [`PreflightError`] so an I/O problem
/// never masquerades as a validation verdict.
#[derive(Debug, Error)]
pub enum InputError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No known delimiter could be detected.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no data to load.
    #[error("Empty data: {0}")]
    EmptyData(String),
}

/// Result type alias for the pre-flight checks.
pub type Result<T> = std::result::Result<T, PreflightError>;
