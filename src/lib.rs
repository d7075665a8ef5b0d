//! `endgame-bound` library crate.
//!
//! Estimates an upper bound on the number of distinct chess-game sequences
//! under three-fold repetition and the fifty-move rule by calibrating a
//! logistic branching-factor model against published reference counts.
//!
//! The binary (`endgame-bound`) is a thin wrapper around this library so that
//! core logic is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod models;
pub mod plot;
pub mod report;
