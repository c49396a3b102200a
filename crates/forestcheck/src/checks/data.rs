//! Schema checks and numeric coercion for the main data table.

use crate::error::{PreflightError, Result};
use crate::input::DataTable;
use crate::preflight::PlotArgs;

use super::iterables::check_iterables_samelen;

/// Validate the main table against the column roles in `args`, coercing the
/// estimate and CI-bound columns to numeric cells in place.
///
/// `derived` names columns the rendering stage computes after validation;
/// annotation references may resolve against it as well as the table.
/// Checks run in a fixed order and the first violated rule aborts the call.
pub fn check_data(table: &mut DataTable, args: &PlotArgs, derived: &[&str]) -> Result<()> {
    if !table.is_rectangular() {
        return Err(PreflightError::NotTabular);
    }

    coerce_numeric(table, &args.estimate, PreflightError::EstimateNotNumeric)?;

    match (&args.ll, &args.hl) {
        (Some(ll), Some(hl)) => {
            coerce_numeric(table, ll, PreflightError::LowerLimitNotNumeric)?;
            coerce_numeric(table, hl, PreflightError::HigherLimitNotNumeric)?;
        }
        (None, Some(_)) => {
            return Err(PreflightError::UnpairedCiBound {
                absent: "ll",
                supplied: "hl",
            });
        }
        (Some(_), None) => {
            return Err(PreflightError::UnpairedCiBound {
                absent: "hl",
                supplied: "ll",
            });
        }
        (None, None) => {}
    }

    check_iterables_samelen(&[
        args.annote.as_ref().map(Vec::len),
        args.annoteheaders.as_ref().map(Vec::len),
    ])?;
    check_iterables_samelen(&[
        args.rightannote.as_ref().map(Vec::len),
        args.right_annoteheaders.as_ref().map(Vec::len),
    ])?;

    for side in [&args.annote, &args.rightannote] {
        if let Some(columns) = side {
            for column in columns {
                if !column_resolves(table, column, derived) {
                    return Err(PreflightError::FieldNotFound(column.clone()));
                }
            }
        }
    }

    if args.annoteheaders.is_some() && args.annote.as_ref().is_none_or(Vec::is_empty) {
        return Err(PreflightError::AnnoteHeadersWithoutColumns);
    }
    if args.right_annoteheaders.is_some() && args.rightannote.as_ref().is_none_or(Vec::is_empty) {
        return Err(PreflightError::RightAnnoteHeadersWithoutColumns);
    }

    Ok(())
}

/// A column reference resolves if it names a current table column or one the
/// rendering stage derives later.
fn column_resolves(table: &DataTable, name: &str, derived: &[&str]) -> bool {
    table.contains_column(name) || derived.contains(&name)
}

/// Rewrite `name` as a numeric column, failing with `on_type_err` if any
/// cell is neither numeric nor parseable text.
///
/// The column is only written back once every cell has parsed, so a failing
/// call never leaves a half-coerced column behind.
fn coerce_numeric(table: &mut DataTable, name: &str, on_type_err: PreflightError) -> Result<()> {
    let column = table
        .column_mut(name)
        .ok_or_else(|| PreflightError::FieldNotFound(name.to_string()))?;

    let mut numeric = Vec::with_capacity(column.len());
    for cell in column.iter() {
        match cell.to_numeric() {
            Some(cell) => numeric.push(cell),
            None => return Err(on_type_err),
        }
    }
    *column = numeric;
    Ok(())
}
