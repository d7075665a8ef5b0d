//! Terminal formatting for fit summaries and comparison tables.

use crate::domain::EvaluatedRow;
use crate::fit::FitOutcome;

/// Format the fitted parameters and search diagnostics.
pub fn format_fit_summary(outcome: &FitOutcome) -> String {
    let p = &outcome.params;
    let mut out = String::new();

    out.push_str("=== endgame-bound - branching model fit ===\n");
    out.push_str(&format!(
        "Grid: {} candidates, {} feasible | MSE(log)={}\n",
        outcome.candidates,
        outcome.feasible,
        fmt_sci(outcome.mse_log, 4)
    ));
    out.push_str("Best-fit parameters:\n");
    out.push_str(&format!("  L1 (initial branching): {:.4}\n", p.l1()));
    out.push_str(&format!("  L2 (asymptotic branching): {:.4}\n", p.l2()));
    out.push_str(&format!("  i0 (midpoint ply): {:.2}\n", p.i0()));
    out.push_str(&format!("  k  (steepness): {:.4}\n", p.k()));

    out
}

/// Format the reference-vs-model table.
pub fn format_report_table(rows: &[EvaluatedRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>6} {:>22} {:>22} {:>10}\n",
        "m", "plies", "reference", "model", "rel.err"
    ));
    out.push_str(&format!(
        "{:-<4} {:-<6} {:-<22} {:-<22} {:-<10}\n",
        "", "", "", "", ""
    ));

    for r in rows {
        out.push_str(&format!(
            "{:>4} {:>6} {:>22} {:>22} {:>10}\n",
            r.full_moves,
            r.plies,
            fmt_sci(r.reference_count, 6),
            fmt_sci(r.model_count, 6),
            fmt_sci(r.relative_error, 3),
        ));
    }

    out
}

/// Scientific notation with `precision` fractional digits and a signed,
/// two-digit exponent (`3.775853e+09`).
///
/// Non-finite values are printed as-is.
pub fn fmt_sci(v: f64, precision: usize) -> String {
    let raw = format!("{v:.precision$e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}
