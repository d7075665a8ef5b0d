//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! reference table -> grid search -> per-checkpoint report
//!
//! Front-ends (CLI, tests) then only deal with presentation and persistence.

use tracing::info;

use crate::data::ReferenceDataset;
use crate::domain::{EvaluatedRow, FitConfig};
use crate::error::AppError;
use crate::fit::{FitOutcome, fit_with_grid};
use crate::report::build_report;

/// All computed outputs of a single `fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub outcome: FitOutcome,
    pub rows: Vec<EvaluatedRow>,
}

/// Execute the fitting pipeline against the published reference table.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    run_fit_with_reference(config, ReferenceDataset::published())
}

/// Execute the fitting pipeline against an explicit reference table.
pub fn run_fit_with_reference(
    config: &FitConfig,
    reference: &ReferenceDataset,
) -> Result<RunOutput, AppError> {
    info!(
        points = reference.len(),
        "Fitting depth-dependent effective branching model to reference table"
    );

    let outcome = fit_with_grid(reference, &config.grid, config.evaluation)?;
    let rows = build_report(reference, &outcome.params);

    Ok(RunOutput { outcome, rows })
}
