//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to CSV/JSON
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParamsError;
use crate::fit::{Evaluation, GridSpec};

/// Full moves `m` -> plies `N = 2m`.
pub fn plies(full_moves: u32) -> u32 {
    2 * full_moves
}

/// One published calibration point: a full-move count and the maximum number of
/// distinct sequences reported for it.
///
/// The ply count is always derived from `full_moves`, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEntry {
    pub full_moves: u32,
    pub count: f64,
}

impl ReferenceEntry {
    pub const fn new(full_moves: u32, count: f64) -> Self {
        Self { full_moves, count }
    }

    pub fn plies(&self) -> u32 {
        plies(self.full_moves)
    }
}

/// Parameters of the logistic branching model.
///
/// Invariants (checked by [`ModelParameters::new`] and on deserialization):
/// - `L1 > L2 > 1`
/// - `i0 > 0`
/// - `k > 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct ModelParameters {
    l1: f64,
    l2: f64,
    i0: f64,
    k: f64,
}

impl ModelParameters {
    pub fn new(l1: f64, l2: f64, i0: f64, k: f64) -> Result<Self, ParamsError> {
        if !(l1.is_finite() && l2.is_finite() && i0.is_finite() && k.is_finite()) {
            return Err(ParamsError::NonFinite { l1, l2, i0, k });
        }
        if l2 <= 1.0 {
            return Err(ParamsError::AsymptoteTooLow(l2));
        }
        if l1 <= l2 {
            return Err(ParamsError::BranchingOrder { l1, l2 });
        }
        if i0 <= 0.0 {
            return Err(ParamsError::Midpoint(i0));
        }
        if k <= 0.0 {
            return Err(ParamsError::Steepness(k));
        }
        Ok(Self { l1, l2, i0, k })
    }

    /// Initial (shallow-depth) branching.
    pub fn l1(&self) -> f64 {
        self.l1
    }

    /// Asymptotic (deep) branching.
    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Midpoint ply of the decay.
    pub fn i0(&self) -> f64 {
        self.i0
    }

    /// Steepness of the decay.
    pub fn k(&self) -> f64 {
        self.k
    }
}

#[derive(Deserialize)]
struct RawParameters {
    l1: f64,
    l2: f64,
    i0: f64,
    k: f64,
}

impl TryFrom<RawParameters> for ModelParameters {
    type Error = ParamsError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        ModelParameters::new(raw.l1, raw.l2, raw.i0, raw.k)
    }
}

/// One comparison row: reference value vs modeled value at a checkpoint.
///
/// Field names double as the CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRow {
    pub full_moves: u32,
    pub plies: u32,
    pub reference_count: f64,
    pub model_count: f64,
    pub relative_error: f64,
}

/// Resolved configuration for a `fit` run.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub csv_path: PathBuf,
    pub export_params: Option<PathBuf>,
    pub grid: GridSpec,
    pub evaluation: Evaluation,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}

/// Portable representation of a fitted model (written by `fit --export-params`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub params: ModelParameters,
    /// Mean squared error of log-counts at the selected parameters.
    pub mse_log: f64,
    pub candidates: usize,
    pub feasible: usize,
    pub grid: BranchingGrid,
}

/// Precomputed branching factor per ply for quick plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchingGrid {
    pub ply: Vec<u32>,
    pub factor: Vec<f64>,
}
