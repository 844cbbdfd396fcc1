//! Command-line parsing for the polynomial predictor.
//!
//! The binary only serves the web form, so the flags are the bind address.
//! Unset flags fall back to `HOST`/`PORT`, then to `127.0.0.1:8080`.

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "polypredict", version, about = "Least-squares polynomial prediction web form")]
pub struct Cli {
    /// Interface to bind (default 127.0.0.1).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (default 8080).
    #[arg(short = 'p', long)]
    pub port: Option<u16>,
}
