//! HTTP front end.
//!
//! Two pages and a health check:
//!
//! - `GET /` renders the prediction form with an empty result
//! - `POST /computation` reads `input_data`, `input_degree`, `input_xval`,
//!   runs the pipeline and re-renders the form with the result
//! - `GET /health` returns a small JSON status
//!
//! Handlers are stateless; the core is pure and safe to call from any task.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AppError;

pub mod page;
pub mod routes;

/// Bind address for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServeConfig {
    /// Defaults overridden by `HOST` / `PORT` (a `.env` file is honored).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| AppError::new(2, format!("PORT must be a valid port number, got '{port}': {e}")))?;
        }
        Ok(config)
    }

    /// Apply CLI flags on top of the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the default filter. Calling this twice is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polypredict=info,tower_http=info".into()),
        )
        .try_init();
}

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(routes::index_page))
        .route("/computation", post(routes::computation_page))
        .route("/health", get(routes::liveness))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServeConfig) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| AppError::new(4, format!("Failed to bind {}:{}: {e}", config.host, config.port)))?;
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::new(4, format!("Failed to read listener address: {e}")))?;

    tracing::info!("polypredict v{} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);

    axum::serve(listener, router())
        .await
        .map_err(|e| AppError::new(4, format!("Server error: {e}")))
}
