//! Forestcheck: pre-flight validation for forest plot inputs.
//!
//! Before a forest plot is laid out, the input table and the column roles
//! the caller names must line up: estimates must be numeric (or text that
//! parses as numbers), confidence-interval bounds must come in pairs,
//! annotation columns must exist, and an explicit group ordering must match
//! the groups the data actually contains. Forestcheck runs those checks up
//! front and fails with the exact diagnostic the user needs, before any
//! layout work starts.
//!
//! # Example
//!
//! ```
//! use forestcheck::{DataTable, PlotArgs};
//!
//! let mut table = DataTable::new();
//! table.insert_column("estimate", ["-1", "2", "3.0"]);
//! table.insert_column("label", ["age", "sex", "bmi"]);
//!
//! let args = PlotArgs::new("estimate", "label");
//! forestcheck::validate(&mut table, &args).unwrap();
//!
//! // The estimate column is numeric after validation.
//! assert!(table.column("estimate").unwrap().iter().all(|c| c.is_numeric()));
//! ```

pub mod checks;
pub mod error;
pub mod input;

mod preflight;

pub use checks::{check_data, check_groups, check_iterables_samelen};
pub use error::{ErrorKind, InputError, PreflightError, Result};
pub use input::{Cell, DataTable, Parser, ParserConfig};
pub use preflight::{DERIVED_COLUMNS, PlotArgs, validate};
