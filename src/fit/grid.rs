//! Parameter grid generation.
//!
//! We fit `(L1, L2, i0, k)` using a deterministic grid search over four
//! independently discretized axes.
//!
//! Why grid search?
//! - The reference table is tiny (10 points), so exhaustive enumeration is cheap.
//! - It cannot get stuck in a local minimum.
//! - It is deterministic given the same axes.
//!
//! Enumeration order is L1 (outermost), L2, i0, k (innermost). A candidate's flat
//! index is its position in that order; the fitter breaks ties on it.

use crate::error::FitError;

/// One evenly spaced axis: `steps` points from `min` to `max` inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl Axis {
    pub const fn new(min: f64, max: f64, steps: usize) -> Self {
        Self { min, max, steps }
    }

    fn values(&self, name: &'static str) -> Result<Vec<f64>, FitError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.max >= self.min) {
            return Err(FitError::InvalidAxis {
                axis: name,
                reason: format!(
                    "min={}, max={} (must be finite with max>=min)",
                    self.min, self.max
                ),
            });
        }
        if self.steps == 0 {
            return Err(FitError::InvalidAxis {
                axis: name,
                reason: "steps must be >= 1".to_string(),
            });
        }
        Ok(lin_space(self.min, self.max, self.steps))
    }
}

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// A single step yields `[min]`.
pub fn lin_space(min: f64, max: f64, steps: usize) -> Vec<f64> {
    if steps == 1 {
        return vec![min];
    }
    let step = (max - min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps - 1 {
        out.push(min + step * i as f64);
    }
    out.push(max);
    out
}

/// Axis bounds and resolution for the four model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Initial branching per ply.
    pub l1: Axis,
    /// Asymptotic branching per ply.
    pub l2: Axis,
    /// Midpoint ply.
    pub i0: Axis,
    /// Steepness.
    pub k: Axis,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            l1: Axis::new(8.0, 14.0, 13),
            l2: Axis::new(2.0, 5.5, 15),
            i0: Axis::new(20.0, 120.0, 21),
            k: Axis::new(0.01, 0.12, 12),
        }
    }
}

impl GridSpec {
    pub fn build(&self) -> Result<ParamGrid, FitError> {
        Ok(ParamGrid {
            l1: self.l1.values("L1")?,
            l2: self.l2.values("L2")?,
            i0: self.i0.values("i0")?,
            k: self.k.values("k")?,
        })
    }
}

/// Materialized axis values with a flat-index view of the Cartesian product.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGrid {
    pub l1: Vec<f64>,
    pub l2: Vec<f64>,
    pub i0: Vec<f64>,
    pub k: Vec<f64>,
}

impl ParamGrid {
    /// Total number of tuples (including ones the fitter will skip).
    pub fn len(&self) -> usize {
        self.l1.len() * self.l2.len() * self.i0.len() * self.k.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tuple `(L1, L2, i0, k)` at flat index `idx` (`k` varies fastest).
    ///
    /// # Panics
    /// Panics if `idx >= self.len()`.
    pub fn tuple(&self, idx: usize) -> (f64, f64, f64, f64) {
        let mut rest = idx;
        let ik = rest % self.k.len();
        rest /= self.k.len();
        let ii0 = rest % self.i0.len();
        rest /= self.i0.len();
        let il2 = rest % self.l2.len();
        rest /= self.l2.len();
        (self.l1[rest], self.l2[il2], self.i0[ii0], self.k[ik])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lin_space_includes_endpoints() {
        let v = lin_space(0.01, 0.12, 12);
        assert_eq!(v.len(), 12);
        assert_eq!(v[0], 0.01);
        assert_eq!(v[11], 0.12);
        assert!((v[1] - 0.02).abs() < 1e-12);
    }

    #[test]
    fn default_grid_size() {
        let grid = GridSpec::default().build().unwrap();
        assert_eq!(grid.len(), 13 * 15 * 21 * 12);
    }

    #[test]
    fn flat_index_follows_nested_order() {
        let grid = GridSpec {
            l1: Axis::new(8.0, 9.0, 2),
            l2: Axis::new(2.0, 4.0, 3),
            i0: Axis::new(20.0, 30.0, 2),
            k: Axis::new(0.1, 0.2, 2),
        }
        .build()
        .unwrap();

        let mut nested = Vec::new();
        for &l1 in &grid.l1 {
            for &l2 in &grid.l2 {
                for &i0 in &grid.i0 {
                    for &k in &grid.k {
                        nested.push((l1, l2, i0, k));
                    }
                }
            }
        }
        let flat: Vec<_> = (0..grid.len()).map(|i| grid.tuple(i)).collect();
        assert_eq!(flat, nested);
    }

    #[test]
    fn invalid_axis_is_rejected() {
        let spec = GridSpec {
            k: Axis::new(0.1, 0.05, 4),
            ..GridSpec::default()
        };
        assert!(matches!(
            spec.build(),
            Err(FitError::InvalidAxis { axis: "k", .. })
        ));

        let spec = GridSpec {
            i0: Axis::new(20.0, 120.0, 0),
            ..GridSpec::default()
        };
        assert!(matches!(
            spec.build(),
            Err(FitError::InvalidAxis { axis: "i0", .. })
        ));
    }
}
