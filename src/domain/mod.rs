//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - parsed inputs (`Point`, `CoordinateList`, `Degree`)
//! - fit outputs (`PolyModel`, `FitQuality`, `FitResult`, `Prediction`)

pub mod types;

pub use types::*;
