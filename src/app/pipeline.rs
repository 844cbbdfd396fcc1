//! The "predict pipeline" behind the web form.
//!
//! Keeping this out of the handlers keeps the core workflow testable on its own:
//! parse points -> parse degree/x -> validate degree -> fit -> evaluate -> revalidate
//!
//! The web layer only deals with presentation.

use crate::domain::{Degree, FitResult, Prediction};
use crate::error::FitError;
use crate::fit::fit_polynomial;
use crate::io::ingest::{parse_coordinates, parse_degree, parse_query};

/// All computed outputs of a single prediction.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub fit: FitResult,
    pub prediction: Prediction,
}

/// Execute the full pipeline and keep every intermediate result.
///
/// The first failing step decides the error, so malformed coordinates win over
/// a bad degree, and a non-integer degree wins over the range check.
pub fn run_prediction(data: &str, degree: &str, x: &str) -> Result<RunOutput, FitError> {
    // 1) Coordinate list.
    let points = parse_coordinates(data)?;

    // 2) Degree and query value, then the degree range check.
    let raw_degree = parse_degree(degree)?;
    let query_x = parse_query(x)?;
    let degree = Degree::new(raw_degree)?;

    // 3) Fit. Degenerate systems are not errors; oversized ones are.
    let fit = fit_polynomial(&points, degree)?;

    // 4) Evaluate.
    let prediction = Prediction::new(fit.model.predict(query_x));

    // 5) The formatted value must parse back as a number. NaN/inf do.
    let prediction = revalidate(prediction)?;

    Ok(RunOutput { fit, prediction })
}

/// Fit and predict, returning only the prediction.
pub fn fit_and_predict(data: &str, degree: &str, x: &str) -> Result<Prediction, FitError> {
    run_prediction(data, degree, x).map(|run| run.prediction)
}

/// String boundary: the predicted value, or one of the two user-facing messages.
pub fn process_input(data: &str, degree: &str, x: &str) -> String {
    match fit_and_predict(data, degree, x) {
        Ok(prediction) => prediction.to_string(),
        Err(err) => err.to_string(),
    }
}

fn revalidate(prediction: Prediction) -> Result<Prediction, FitError> {
    prediction
        .to_string()
        .parse::<f64>()
        .map(|_| prediction)
        .map_err(|_| FitError::MalformedInput)
}
