//! Argument surface and orchestration for the pre-flight checks.

use crate::checks::{check_data, check_groups};
use crate::error::Result;
use crate::input::DataTable;

/// Columns the rendering stage derives after validation.
///
/// Annotation references may name these even though they are not in the
/// table yet. The renderer and the checks share this one list so the two
/// stages cannot drift apart silently.
pub const DERIVED_COLUMNS: &[&str] = &["ci_range", "est_ci", "moerror"];

/// Column roles and display options for one forest plot.
///
/// Field names are the vocabulary the diagnostics use (`'ll'`, `'hl'`,
/// `'annote'`, ...), so a failure message always names the argument to fix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotArgs {
    /// Column holding the point estimates.
    pub estimate: String,
    /// Column holding the per-row labels.
    pub varlabel: String,
    /// Column holding the CI lower limits.
    pub ll: Option<String>,
    /// Column holding the CI higher limits.
    pub hl: Option<String>,
    /// Left-side annotation columns.
    pub annote: Option<Vec<String>>,
    /// Header labels for the left-side annotations.
    pub annoteheaders: Option<Vec<String>>,
    /// Right-side annotation columns.
    pub rightannote: Option<Vec<String>>,
    /// Header labels for the right-side annotations.
    pub right_annoteheaders: Option<Vec<String>>,
    /// Column the rows are grouped by.
    pub groupvar: Option<String>,
    /// Explicit display order for the groups.
    pub group_order: Option<Vec<String>>,
}

impl PlotArgs {
    /// Create arguments for a plot of `estimate` labeled by `varlabel`.
    pub fn new(estimate: impl Into<String>, varlabel: impl Into<String>) -> Self {
        Self {
            estimate: estimate.into(),
            varlabel: varlabel.into(),
            ..Self::default()
        }
    }

    /// Set the CI lower-limit column.
    pub fn with_ll(mut self, ll: impl Into<String>) -> Self {
        self.ll = Some(ll.into());
        self
    }

    /// Set the CI higher-limit column.
    pub fn with_hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = Some(hl.into());
        self
    }

    /// Set the left-side annotation columns.
    pub fn with_annote<I, S>(mut self, annote: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annote = Some(annote.into_iter().map(Into::into).collect());
        self
    }

    /// Set the left-side annotation headers.
    pub fn with_annoteheaders<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annoteheaders = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Set the right-side annotation columns.
    pub fn with_rightannote<I, S>(mut self, rightannote: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rightannote = Some(rightannote.into_iter().map(Into::into).collect());
        self
    }

    /// Set the right-side annotation headers.
    pub fn with_right_annoteheaders<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.right_annoteheaders = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Set the grouping column.
    pub fn with_groupvar(mut self, groupvar: impl Into<String>) -> Self {
        self.groupvar = Some(groupvar.into());
        self
    }

    /// Set the explicit group display order.
    pub fn with_group_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_order = Some(order.into_iter().map(Into::into).collect());
        self
    }
}

/// Run every pre-flight check for one plot, in order.
///
/// Validates the table schema first (coercing the estimate and CI-bound
/// columns to numeric cells in place), then the grouping arguments. The
/// first violated rule aborts the whole call; nothing is retried or
/// partially applied, so the renderer only ever sees a table that passed
/// every check.
pub fn validate(table: &mut DataTable, args: &PlotArgs) -> Result<()> {
    check_data(table, args, DERIVED_COLUMNS)?;
    check_groups(table, args.groupvar.as_deref(), args.group_order.as_deref())
}
