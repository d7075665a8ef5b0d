//! Grid-search calibration of the branching model.
//!
//! Given:
//! - a reference table of `(plies, count)` points
//! - a parameter grid over `(L1, L2, i0, k)`
//!
//! we evaluate, for each candidate tuple with `L2 < L1`:
//! - the modeled log-count at every reference ply count
//! - the mean squared error against the reference log-counts
//!
//! and return the candidate with the lowest error.

use nalgebra::DVector;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::data::ReferenceDataset;
use crate::domain::ModelParameters;
use crate::error::FitError;
use crate::fit::grid::{GridSpec, ParamGrid};
use crate::models::{clamped_plies, cumulative_log_counts};

/// How candidates are evaluated. Both modes select the same tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    #[default]
    Parallel,
    Sequential,
}

/// Selected parameters plus search diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub params: ModelParameters,
    /// Mean squared error of log-counts at `params`.
    pub mse_log: f64,
    /// Number of tuples enumerated (the full Cartesian product).
    pub candidates: usize,
    /// Number of tuples that produced a finite error.
    pub feasible: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    idx: usize,
    params: ModelParameters,
    mse: f64,
}

/// Fit the model over the default grid.
pub fn fit(reference: &ReferenceDataset) -> Result<ModelParameters, FitError> {
    fit_with_grid(reference, &GridSpec::default(), Evaluation::Parallel).map(|o| o.params)
}

/// Fit the model over an explicit grid.
pub fn fit_with_grid(
    reference: &ReferenceDataset,
    spec: &GridSpec,
    evaluation: Evaluation,
) -> Result<FitOutcome, FitError> {
    let grid = spec.build()?;
    let plies = reference.plies();
    let logs_ref = DVector::from_iterator(
        reference.len(),
        reference.entries().iter().map(|e| e.count.ln()),
    );

    if reference.len() < 2 {
        warn!(
            points = reference.len(),
            "Single-point calibration: curve shape away from the reference ply is unconstrained"
        );
    }
    info!(
        candidates = grid.len(),
        points = reference.len(),
        ?evaluation,
        "Starting grid search"
    );
    debug!(l1 = ?grid.l1, l2 = ?grid.l2, i0 = ?grid.i0, k = ?grid.k, "Grid axes");

    // (best so far, feasible count). `pick` must stay associative and commutative.
    let merge = |a: (Candidate, usize), b: (Candidate, usize)| (pick(a.0, b.0), a.1 + b.1);
    let reduced = match evaluation {
        Evaluation::Parallel => (0..grid.len())
            .into_par_iter()
            .filter_map(|idx| evaluate_candidate(&grid, idx, &plies, &logs_ref))
            .map(|c| (c, 1))
            .reduce_with(merge),
        Evaluation::Sequential => (0..grid.len())
            .filter_map(|idx| evaluate_candidate(&grid, idx, &plies, &logs_ref))
            .map(|c| (c, 1))
            .reduce(merge),
    };

    let Some((best, feasible)) = reduced else {
        return Err(FitError::Exhausted {
            candidates: grid.len(),
        });
    };

    let max_ply = plies.last().copied().unwrap_or(0);
    let clamped = clamped_plies(max_ply, &best.params);
    if clamped > 0 {
        debug!(clamped, max_ply, "Branching factor clamped at selected parameters");
    }

    info!(
        l1 = best.params.l1(),
        l2 = best.params.l2(),
        i0 = best.params.i0(),
        k = best.params.k(),
        mse_log = best.mse,
        feasible,
        "Grid search finished"
    );

    Ok(FitOutcome {
        params: best.params,
        mse_log: best.mse,
        candidates: grid.len(),
        feasible,
    })
}

fn evaluate_candidate(
    grid: &ParamGrid,
    idx: usize,
    plies: &[u32],
    logs_ref: &DVector<f64>,
) -> Option<Candidate> {
    let (l1, l2, i0, k) = grid.tuple(idx);
    if l2 >= l1 {
        return None;
    }
    // Tuples outside the parameter invariants (e.g. an L2 axis reaching down to 1)
    // are skipped rather than selected.
    let params = ModelParameters::new(l1, l2, i0, k).ok()?;

    let logs = cumulative_log_counts(plies, &params);
    for &s in &logs {
        let count = s.exp();
        if !count.is_finite() || count <= 0.0 {
            return None;
        }
    }

    let logs_model = DVector::from_vec(logs);
    let mse = (logs_model - logs_ref).norm_squared() / logs_ref.len() as f64;
    if mse.is_finite() {
        Some(Candidate { idx, params, mse })
    } else {
        None
    }
}

/// Deterministic selection: the lower MSE wins; exact ties go to the lower grid index.
fn pick(a: Candidate, b: Candidate) -> Candidate {
    if b.mse < a.mse || (b.mse == a.mse && b.idx < a.idx) {
        b
    } else {
        a
    }
}
