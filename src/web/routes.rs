//! Route handlers.

use axum::{Form, Json, response::Html};
use serde::Deserialize;

use crate::app::pipeline::process_input;
use crate::error::FitError;

use super::page::render_page;

/// Fields posted by the prediction form. All three are required.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputationForm {
    pub input_data: String,
    pub input_degree: String,
    pub input_xval: String,
}

/// `GET /`: the form with an empty result.
pub async fn index_page() -> Html<String> {
    Html(render_page(None, ""))
}

/// `POST /computation`: run the prediction and re-render the form.
///
/// The fit runs on the blocking pool so a large system does not hold up an
/// async worker.
pub async fn computation_page(Form(form): Form<ComputationForm>) -> Html<String> {
    let request = form.clone();
    let result = tokio::task::spawn_blocking(move || {
        process_input(&request.input_data, &request.input_degree, &request.input_xval)
    })
    .await
    .unwrap_or_else(|err| {
        tracing::error!(error = %err, "prediction task failed");
        FitError::MalformedInput.to_string()
    });
    tracing::info!(
        degree = %form.input_degree,
        x = %form.input_xval,
        result = %result,
        "computed prediction"
    );
    Html(render_page(Some(&form), &result))
}

/// `GET /health`: liveness check.
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
