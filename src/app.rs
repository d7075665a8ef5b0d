//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the grid-search fit
//! - prints the summary, table, and optional plot
//! - writes the CSV (and optional params JSON) exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, FitArgs, PlotArgs};
use crate::domain::FitConfig;
use crate::error::AppError;
use crate::fit::{Evaluation, GridSpec};

pub mod pipeline;

/// Entry point for the `endgame-bound` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_fit_summary(&run.outcome));
    println!("{}", crate::report::format_report_table(&run.rows));

    if config.plot {
        let plot = crate::plot::render_report_plot(
            &run.rows,
            &run.outcome.params,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    crate::io::export::write_report_csv(&config.csv_path, &run.rows)?;
    info!(path = %config.csv_path.display(), rows = run.rows.len(), "Wrote report CSV");
    println!("Wrote {}", config.csv_path.display());

    if let Some(path) = &config.export_params {
        crate::io::params::write_params_json(path, &run.outcome)?;
        info!(path = %path.display(), "Wrote params JSON");
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::params::read_params_json(&args.params)?;
    let p = &file.params;
    println!(
        "L1={:.4} L2={:.4} i0={:.2} k={:.4} (generated {})",
        p.l1(),
        p.l2(),
        p.i0(),
        p.k(),
        file.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );
    println!("{}", crate::plot::render_branching_plot(&file, args.width, args.height));
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        csv_path: args.write_csv.clone(),
        export_params: args.export_params.clone(),
        grid: GridSpec::default(),
        evaluation: if args.sequential {
            Evaluation::Sequential
        } else {
            Evaluation::Parallel
        },
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
    }
}

/// Rewrite argv so the binary defaults to `fit`.
///
/// Rules:
/// - `endgame-bound`                       -> `endgame-bound fit`
/// - `endgame-bound --write-csv out.csv`   -> `endgame-bound fit --write-csv out.csv`
/// - `endgame-bound --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_fit() {
        assert_eq!(rewrite_args(args(&["eb"])), args(&["eb", "fit"]));
    }

    #[test]
    fn leading_flags_are_fit_flags() {
        assert_eq!(
            rewrite_args(args(&["eb", "--write-csv", "x.csv"])),
            args(&["eb", "fit", "--write-csv", "x.csv"])
        );
    }

    #[test]
    fn help_and_subcommands_are_untouched() {
        assert_eq!(rewrite_args(args(&["eb", "--help"])), args(&["eb", "--help"]));
        assert_eq!(
            rewrite_args(args(&["eb", "plot", "--params", "p.json"])),
            args(&["eb", "plot", "--params", "p.json"])
        );
    }

    #[test]
    fn sequential_flag_selects_evaluation() {
        let cli = crate::cli::Cli::parse_from(["eb", "fit", "--sequential", "--write-csv", "o.csv"]);
        let Command::Fit(fit_args) = cli.command else {
            panic!("expected fit");
        };
        let config = fit_config_from_args(&fit_args);
        assert_eq!(config.evaluation, Evaluation::Sequential);
        assert_eq!(config.csv_path, std::path::PathBuf::from("o.csv"));
        assert_eq!(config.grid, GridSpec::default());
    }
}
