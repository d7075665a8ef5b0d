//! Read/write fitted-parameter JSON files.
//!
//! A params file is the "portable" representation of a fit:
//! - the four model parameters
//! - search diagnostics (log-space MSE, grid size, feasible count)
//! - a precomputed per-ply branching grid for quick plotting
//!
//! The schema is defined by `domain::ParamsFile`.

use std::fs::{File, create_dir_all};
use std::path::Path;

use chrono::Utc;

use crate::domain::{BranchingGrid, ModelParameters, ParamsFile};
use crate::error::AppError;
use crate::fit::FitOutcome;
use crate::models::branching_factor;

/// Plies covered by the exported branching grid.
pub const GRID_MAX_PLY: u32 = 200;

/// Build the params file contents for a fit outcome.
pub fn params_file(outcome: &FitOutcome) -> ParamsFile {
    ParamsFile {
        tool: "endgame-bound".to_string(),
        generated_at: Utc::now(),
        params: outcome.params,
        mse_log: outcome.mse_log,
        candidates: outcome.candidates,
        feasible: outcome.feasible,
        grid: build_grid(&outcome.params, GRID_MAX_PLY),
    }
}

/// Write a params JSON file.
pub fn write_params_json(path: &Path, outcome: &FitOutcome) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| {
            AppError::new(2, format!("Failed to create directory '{}': {e}", parent.display()))
        })?;
    }
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create params JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &params_file(outcome))
        .map_err(|e| AppError::new(2, format!("Failed to write params JSON: {e}")))?;

    Ok(())
}

/// Read a params JSON file. Parameters are re-validated on load.
pub fn read_params_json(path: &Path) -> Result<ParamsFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open params JSON '{}': {e}", path.display())))?;
    let params: ParamsFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid params JSON: {e}")))?;
    if params.grid.ply.len() != params.grid.factor.len() {
        return Err(AppError::new(2, "Invalid params JSON: grid columns differ in length."));
    }
    Ok(params)
}

fn build_grid(params: &ModelParameters, max_ply: u32) -> BranchingGrid {
    let ply: Vec<u32> = (1..=max_ply).collect();
    let factor = ply.iter().map(|&i| branching_factor(i, params)).collect();
    BranchingGrid { ply, factor }
}
