//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - reference points: `o`
//! - model curve: `-` line

use std::f64::consts::LN_10;

use crate::domain::{EvaluatedRow, ModelParameters, ParamsFile};
use crate::models::modeled_log_count;

/// Plot log10(count) against plies: reference points over the model curve.
pub fn render_report_plot(
    rows: &[EvaluatedRow],
    params: &ModelParameters,
    width: usize,
    height: usize,
) -> String {
    let points: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.plies as f64, r.reference_count.log10()))
        .collect();

    let (x_min, x_max) = x_range(&points).unwrap_or((0.0, 100.0));
    let first = x_min.floor().max(0.0) as u32;
    let last = x_max.ceil() as u32;
    let curve: Vec<(f64, f64)> = (first..=last)
        .map(|n| (n as f64, modeled_log_count(n, params) / LN_10))
        .collect();

    render_plot(&points, &curve, x_min, x_max, width, height, "log10(count)")
}

/// Plot the per-ply branching factor stored in a params file.
pub fn render_branching_plot(file: &ParamsFile, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = file
        .grid
        .ply
        .iter()
        .zip(file.grid.factor.iter())
        .map(|(&i, &g)| (i as f64, g))
        .collect();

    let (x_min, x_max) = x_range(&curve).unwrap_or((1.0, 200.0));
    render_plot(&[], &curve, x_min, x_max, width, height, "branching")
}

fn render_plot(
    points: &[(f64, f64)],
    curve: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    width: usize,
    height: usize,
    y_label: &str,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(points, curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Curve first so points overlay it.
    draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);

    for &(x, y) in points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: plies=[{x_min:.0}, {x_max:.0}] | {y_label}=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    out
}

fn x_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(points: &[(f64, f64)], curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in points.iter().chain(curve.iter()) {
        if y.is_finite() {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        if !y.is_finite() {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let points = [(0.0, 0.0), (9.0, 10.0)];
        let curve = [(0.0, 0.0), (9.0, 0.0)];
        let txt = render_plot(&points, &curve, 0.0, 9.0, 10, 5, "y");
        let expected = concat!(
            "Plot: plies=[0, 9] | y=[-0.50, 10.50]\n",
            "         o\n",
            "\n",
            "\n",
            "\n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn report_plot_has_fixed_shape() {
        let params = ModelParameters::new(10.0, 3.0, 60.0, 0.05).unwrap();
        let rows: Vec<EvaluatedRow> = [5u32, 25, 50]
            .iter()
            .map(|&m| EvaluatedRow {
                full_moves: m,
                plies: 2 * m,
                reference_count: 10f64.powi(m as i32),
                model_count: 0.0,
                relative_error: 0.0,
            })
            .collect();
        let txt = render_report_plot(&rows, &params, 40, 12);
        assert_eq!(txt.lines().count(), 13);
        assert!(txt.starts_with("Plot: plies=[10, 100] | log10(count)="));
        let marks: usize = txt.lines().skip(1).map(|l| l.matches('o').count()).sum();
        assert_eq!(marks, 3);
    }
}
