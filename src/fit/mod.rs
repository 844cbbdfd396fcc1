//! Curve fitting.
//!
//! Responsibilities:
//!
//! - build the scaled Vandermonde system for a requested degree
//! - solve it by least squares
//! - report fit quality (SSE, RMSE, rank)

pub mod fitter;

pub use fitter::*;
