//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - reference calibration points (`ReferenceEntry`)
//! - the branching model parameters (`ModelParameters`)
//! - report rows and exported files (`EvaluatedRow`, `ParamsFile`)

pub mod types;

pub use types::*;
