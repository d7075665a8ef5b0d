//! Input/output helpers.
//!
//! - report CSV export + parse-back (`export`)
//! - fitted-parameter JSON read/write (`params`)

pub mod export;
pub mod params;

pub use export::*;
pub use params::*;
