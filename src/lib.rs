//! `linefit` library crate.
//!
//! The binary (`linefit`) is a thin wrapper around this library so that:
//!
//! - the fitting code is testable without spawning processes
//! - the grid search can be embedded with its own cancellation and worker settings

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
