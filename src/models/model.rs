//! Depth-dependent effective branching model.
//!
//! The per-ply branching factor decays logistically with depth:
//!
//! ```text
//! g(i) = L2 + (L1 - L2) / (1 + exp(k * (i - i0)))
//! ```
//!
//! and the modeled sequence count for `N` plies is `M(N) = Π_{i=1..N} g(i)`.
//!
//! `M(N)` reaches ~1e56 over the reference range, so the product is always
//! accumulated as a sum of logs and exponentiated once at the end.

use crate::domain::ModelParameters;

/// Lower bound on every factor.
///
/// A factor only marginally above one contributes an `ln g` below the
/// resolution of the running log-sum, so anything under this floor is raised to it.
pub const CLAMP_FLOOR: f64 = 1.0 + 1e-7;

/// Raw logistic value before clamping.
fn logistic(i: u32, params: &ModelParameters) -> f64 {
    let (l1, l2) = (params.l1(), params.l2());
    l2 + (l1 - l2) / (1.0 + (params.k() * (i as f64 - params.i0())).exp())
}

/// Effective branching factor at ply `i` (1-based), always `>= CLAMP_FLOOR`.
pub fn branching_factor(i: u32, params: &ModelParameters) -> f64 {
    let g = logistic(i, params);
    if g > CLAMP_FLOOR { g } else { CLAMP_FLOOR }
}

/// `ln M(N)`: sum of `ln g(i)` for `i = 1..=N`.
pub fn modeled_log_count(n: u32, params: &ModelParameters) -> f64 {
    let mut s = 0.0;
    for i in 1..=n {
        s += branching_factor(i, params).ln();
    }
    s
}

/// Modeled number of sequences for `N` plies. `N = 0` is the empty product (1).
pub fn modeled_count(n: u32, params: &ModelParameters) -> f64 {
    modeled_log_count(n, params).exp()
}

/// `ln M(N)` for each `N` in `plies` (ascending), in a single pass.
///
/// Values are bit-identical to calling [`modeled_log_count`] per entry since the
/// summation order is the same.
pub fn cumulative_log_counts(plies: &[u32], params: &ModelParameters) -> Vec<f64> {
    debug_assert!(plies.windows(2).all(|w| w[0] <= w[1]));

    let mut out = Vec::with_capacity(plies.len());
    let mut s = 0.0;
    let mut i = 0u32;
    for &n in plies {
        while i < n {
            i += 1;
            s += branching_factor(i, params).ln();
        }
        out.push(s);
    }
    out
}

/// Number of plies in `1..=N` whose factor hit [`CLAMP_FLOOR`].
pub fn clamped_plies(n: u32, params: &ModelParameters) -> usize {
    (1..=n).filter(|&i| logistic(i, params) <= CLAMP_FLOOR).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> Vec<ModelParameters> {
        let mut out = Vec::new();
        for &(l1, l2) in &[
            (8.0, 2.0),
            (14.0, 5.5),
            (1.5, 1.0000001),
            (30.0, 1.01),
            (3.0, 1.0 + 1e-15),
        ] {
            for &i0 in &[1.0, 20.0, 120.0] {
                for &k in &[0.001, 0.05, 5.0] {
                    out.push(ModelParameters::new(l1, l2, i0, k).unwrap());
                }
            }
        }
        out
    }

    #[test]
    fn factor_is_strictly_above_one() {
        for p in sample_params() {
            for i in 1..=200 {
                assert!(branching_factor(i, &p) > 1.0, "i={i} params={p:?}");
            }
        }
    }

    #[test]
    fn factor_decays_from_l1_to_l2() {
        let p = ModelParameters::new(12.0, 3.0, 40.0, 0.5).unwrap();
        assert!((branching_factor(1, &p) - 12.0).abs() < 1e-6);
        assert!((branching_factor(40, &p) - 7.5).abs() < 1e-12);
        assert!((branching_factor(200, &p) - 3.0).abs() < 1e-6);
        for i in 1..200 {
            assert!(branching_factor(i + 1, &p) <= branching_factor(i, &p));
        }
    }

    #[test]
    fn zero_plies_is_empty_product() {
        for p in sample_params() {
            assert_eq!(modeled_count(0, &p), 1.0);
        }
    }

    #[test]
    fn count_is_strictly_increasing_in_plies() {
        for p in sample_params() {
            let mut prev = modeled_count(0, &p);
            for n in 1..=100 {
                let cur = modeled_count(n, &p);
                assert!(cur.is_finite() && cur > prev, "n={n} params={p:?}");
                prev = cur;
            }
        }
    }

    #[test]
    fn log_accumulation_survives_large_products() {
        // ~20^200, close to the top of the f64 range.
        let p = ModelParameters::new(20.0, 19.0, 1000.0, 0.01).unwrap();
        let c = modeled_count(200, &p);
        assert!(c.is_finite());
        assert!(c > 1e250);
    }

    #[test]
    fn cumulative_matches_per_entry() {
        let p = ModelParameters::new(11.0, 3.5, 55.0, 0.07).unwrap();
        let plies = [10, 20, 20, 50, 100];
        let cum = cumulative_log_counts(&plies, &p);
        for (&n, &s) in plies.iter().zip(cum.iter()) {
            assert_eq!(s, modeled_log_count(n, &p));
        }
    }

    #[test]
    fn factor_never_drops_below_floor() {
        for p in sample_params() {
            for i in 1..=200 {
                assert!(branching_factor(i, &p) >= CLAMP_FLOOR, "i={i} params={p:?}");
            }
        }
    }

    #[test]
    fn near_one_asymptote_keeps_count_growing() {
        // Deep plies sit at L2 ~ 1 + 1e-15 while the log-sum is already ~80.
        let p = ModelParameters::new(1e6, 1.0 + 1e-15, 5.0, 5.0).unwrap();
        for n in 1..=100 {
            assert!(modeled_count(n, &p) > modeled_count(n - 1, &p), "n={n}");
        }
        assert!(clamped_plies(100, &p) > 0);
        assert_eq!(branching_factor(100, &p), CLAMP_FLOOR);
    }

    #[test]
    fn moderate_parameters_never_clamp() {
        let p = ModelParameters::new(14.0, 1.0001, 20.0, 5.0).unwrap();
        assert_eq!(clamped_plies(100, &p), 0);
    }
}
