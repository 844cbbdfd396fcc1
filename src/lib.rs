//! `polypredict` library crate.
//!
//! The binary (`polypredict`) is a thin wrapper around this library so that
//! the fitting function is testable without spawning processes or servers.
//!
//! Entry point for embedders: [`app::pipeline::process_input`].

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod web;

pub use app::pipeline::{fit_and_predict, process_input, run_prediction};
pub use error::FitError;
