//! Reference data the model is calibrated against.

pub mod reference;

pub use reference::*;
