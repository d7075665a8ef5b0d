//! Model calibration.
//!
//! Responsibilities:
//!
//! - discretize the four parameter axes (`grid`)
//! - evaluate each candidate tuple (parallel) and select the best (`fitter`)

pub mod fitter;
pub mod grid;

pub use fitter::*;
pub use grid::*;
