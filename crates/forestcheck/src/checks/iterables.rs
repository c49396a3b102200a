//! Length agreement between related argument sequences.

use crate::error::{PreflightError, Result};

/// Confirm that every supplied sequence has the same length.
///
/// Absent sequences (`None`) are ignored, so optional arguments pass through
/// without unwrapping. Zero or one present sequence trivially agrees.
pub fn check_iterables_samelen(lens: &[Option<usize>]) -> Result<()> {
    let mut present = lens.iter().flatten();
    if let Some(first) = present.next() {
        if present.any(|len| len != first) {
            return Err(PreflightError::LengthMismatch);
        }
    }
    Ok(())
}
