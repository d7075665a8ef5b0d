//! Reporting utilities: per-checkpoint comparison rows and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::data::ReferenceDataset;
use crate::domain::{EvaluatedRow, ModelParameters, ReferenceEntry};
use crate::error::ReportError;
use crate::models::modeled_count;

pub mod format;

pub use format::*;

/// One row per reference entry, in ascending full-move order.
pub fn build_report(reference: &ReferenceDataset, params: &ModelParameters) -> Vec<EvaluatedRow> {
    reference
        .entries()
        .iter()
        .map(|e| evaluate_entry(e, params))
        .collect()
}

/// The row for a single checkpoint.
pub fn row_for(
    reference: &ReferenceDataset,
    params: &ModelParameters,
    full_moves: u32,
) -> Result<EvaluatedRow, ReportError> {
    reference
        .get(full_moves)
        .map(|e| evaluate_entry(e, params))
        .ok_or(ReportError::MissingReference { full_moves })
}

fn evaluate_entry(entry: &ReferenceEntry, params: &ModelParameters) -> EvaluatedRow {
    let plies = entry.plies();
    let model_count = modeled_count(plies, params);
    EvaluatedRow {
        full_moves: entry.full_moves,
        plies,
        reference_count: entry.count,
        model_count,
        relative_error: (model_count - entry.count).abs() / entry.count,
    }
}
