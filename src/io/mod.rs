//! Input helpers: raw text parsing for coordinates, degree and query.

pub mod ingest;

pub use ingest::*;
