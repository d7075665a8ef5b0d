use thiserror::Error;

/// Top-level error surfaced by the binary: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Violations of the `ModelParameters` invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("Model parameters must be finite (L1={l1}, L2={l2}, i0={i0}, k={k}).")]
    NonFinite { l1: f64, l2: f64, i0: f64, k: f64 },

    #[error("Initial branching L1={l1} must exceed asymptotic branching L2={l2}.")]
    BranchingOrder { l1: f64, l2: f64 },

    #[error("Asymptotic branching L2={0} must exceed 1.")]
    AsymptoteTooLow(f64),

    #[error("Midpoint ply i0={0} must be positive.")]
    Midpoint(f64),

    #[error("Steepness k={0} must be positive.")]
    Steepness(f64),
}

/// Invalid reference tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Reference table is empty.")]
    Empty,

    #[error("Reference entry has a non-positive full-move count.")]
    NonPositiveMoves,

    #[error("Full-move count {0} is too large to express in plies.")]
    MovesOutOfRange(u32),

    #[error("Reference count for {full_moves} full moves must be finite and positive (got {count}).")]
    InvalidCount { full_moves: u32, count: f64 },

    #[error("Duplicate reference entry for {0} full moves.")]
    Duplicate(u32),
}

/// Grid-search failures. All of these are fatal for a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("Invalid {axis} axis: {reason}")]
    InvalidAxis { axis: &'static str, reason: String },

    #[error(
        "Grid search exhausted: none of the {candidates} candidates produced finite, positive modeled counts."
    )]
    Exhausted { candidates: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("No reference entry for {full_moves} full moves.")]
    MissingReference { full_moves: u32 },
}

impl From<ParamsError> for AppError {
    fn from(err: ParamsError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(4, err.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        AppError::new(3, err.to_string())
    }
}
