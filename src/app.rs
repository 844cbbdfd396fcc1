//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses the bind flags
//! - installs logging
//! - runs the web server until it is stopped

use clap::Parser;

use crate::cli::Cli;
use crate::error::AppError;
use crate::web::ServeConfig;

pub mod pipeline;

/// Entry point for the `polypredict` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::web::init_tracing();
    let config = resolve_config(cli)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::new(4, format!("Failed to start async runtime: {e}")))?;

    runtime.block_on(crate::web::serve(config))
}

/// Environment first, then flags on top.
fn resolve_config(cli: Cli) -> Result<ServeConfig, AppError> {
    Ok(ServeConfig::from_env()?.with_overrides(cli.host, cli.port))
}
