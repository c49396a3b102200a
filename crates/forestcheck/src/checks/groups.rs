//! Consistency checks for grouping arguments.

use indexmap::IndexSet;

use crate::error::{PreflightError, Result};
use crate::input::DataTable;

use super::iterables::check_iterables_samelen;

/// Validate the grouping arguments against the table.
///
/// An explicit `group_order` requires a grouping column, must name exactly
/// as many groups as the column holds distinct values, and must only name
/// values that actually occur. A grouping column alone imposes no ordering
/// constraint; the natural table order is used downstream.
pub fn check_groups(
    table: &DataTable,
    groupvar: Option<&str>,
    group_order: Option<&[String]>,
) -> Result<()> {
    let Some(order) = group_order else {
        return Ok(());
    };
    let Some(groupvar) = groupvar else {
        return Err(PreflightError::OrderWithoutGroupColumn);
    };

    let detected = detected_groups(table, groupvar)?;
    check_iterables_samelen(&[Some(order.len()), Some(detected.len())])?;

    if order.iter().any(|group| !detected.contains(group.as_str())) {
        return Err(PreflightError::UnknownGroup);
    }
    Ok(())
}

/// Distinct values of the grouping column, in order of first appearance.
fn detected_groups(table: &DataTable, groupvar: &str) -> Result<IndexSet<String>> {
    let column = table
        .column(groupvar)
        .ok_or_else(|| PreflightError::FieldNotFound(groupvar.to_string()))?;
    Ok(column.iter().map(|cell| cell.to_string()).collect())
}
