//! Command-line parsing for the branching-model calibrator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conventional location of the exported comparison table.
pub const DEFAULT_CSV_PATH: &str = "data/endgame_counts.csv";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "endgame-bound",
    version,
    about = "Fit a depth-dependent branching model to published sequence-count bounds"
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence when set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the model to the reference table, print the comparison, and export it as CSV.
    Fit(FitArgs),
    /// Plot the branching curve from a previously exported params JSON.
    Plot(PlotArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Output CSV path.
    #[arg(long = "write-csv", env = "ENDGAME_BOUND_CSV", default_value = DEFAULT_CSV_PATH)]
    pub write_csv: PathBuf,

    /// Export the fitted parameters (plus a per-ply branching grid) to JSON.
    #[arg(long = "export-params")]
    pub export_params: Option<PathBuf>,

    /// Render an ASCII plot of log10(count), reference vs model.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Evaluate grid candidates on a single thread (same result, slower).
    #[arg(long)]
    pub sequential: bool,
}

/// Options for plotting saved parameters.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Params JSON file produced by `endgame-bound fit --export-params`.
    #[arg(long, value_name = "JSON")]
    pub params: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_defaults() {
        let cli = Cli::parse_from(["endgame-bound", "fit"]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert!(!cli.verbose);
        assert!(!args.plot);
        assert!(!args.sequential);
        assert!(args.export_params.is_none());
        // The env var may be set in a developer shell; only check the default when it isn't.
        if std::env::var_os("ENDGAME_BOUND_CSV").is_none() {
            assert_eq!(args.write_csv, PathBuf::from(DEFAULT_CSV_PATH));
        }
    }

    #[test]
    fn plot_requires_params() {
        assert!(Cli::try_parse_from(["endgame-bound", "plot"]).is_err());
        let cli = Cli::try_parse_from(["endgame-bound", "plot", "--params", "p.json", "-v"]).unwrap();
        assert!(cli.verbose);
        let Command::Plot(args) = cli.command else {
            panic!("expected plot");
        };
        assert_eq!(args.params, PathBuf::from("p.json"));
        assert_eq!(args.width, 100);
    }
}
