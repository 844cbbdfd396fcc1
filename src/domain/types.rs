//! Shared domain types.
//!
//! These types are intentionally kept lightweight: they live for one request
//! and nothing about them is persisted.

use std::fmt;

use crate::error::FitError;

/// One observed `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered, non-empty list of observations.
///
/// There is no minimum beyond one point: a list shorter than `degree + 1`
/// is accepted and fitted as an under-determined system.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateList {
    points: Vec<Point>,
}

impl CoordinateList {
    /// Returns `None` for an empty list.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Validated polynomial degree (`>= 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree(usize);

impl Degree {
    /// Validate a parsed integer degree.
    ///
    /// Values below one are a domain error. Values that do not fit a `usize`
    /// are treated as malformed input.
    pub fn new(raw: i64) -> Result<Self, FitError> {
        if raw < 1 {
            return Err(FitError::DegreeBelowOne);
        }
        usize::try_from(raw)
            .map(Self)
            .map_err(|_| FitError::MalformedInput)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of polynomial coefficients (`degree + 1`), saturating.
    pub fn n_coefficients(self) -> usize {
        self.0.saturating_add(1)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Predicted y-value.
///
/// NaN and ±inf are legitimate predictions (degenerate fits) and are carried
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction(f64);

impl Prediction {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Shortest decimal text that parses back to the same `f64`
/// (`4.000000000000001`, `4.0`, `NaN`, `inf`, `1e20`).
impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Fitted polynomial, coefficients in ascending power order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyModel {
    pub degree: Degree,
    pub coefficients: Vec<f64>,
}

impl PolyModel {
    pub fn predict(&self, x: f64) -> f64 {
        crate::math::horner(&self.coefficients, x)
    }
}

/// Goodness-of-fit diagnostics for a polynomial fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
    /// Numerical rank of the (column-scaled) design matrix.
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub model: PolyModel,
    pub quality: FitQuality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_validation_boundaries() {
        assert_eq!(Degree::new(1).map(Degree::get), Ok(1));
        assert_eq!(Degree::new(0), Err(FitError::DegreeBelowOne));
        assert_eq!(Degree::new(-5), Err(FitError::DegreeBelowOne));
        assert_eq!(Degree::new(3).map(Degree::n_coefficients), Ok(4));
    }

    #[test]
    fn prediction_display_round_trips() {
        for v in [4.000000000000001, 17.400000000000016, 4.0, -0.1, 1e20, 1e-9] {
            let text = Prediction::new(v).to_string();
            let back: f64 = text.parse().unwrap();
            assert_eq!(back, v, "round-trip failed for {text}");
        }
        assert_eq!(Prediction::new(4.0).to_string(), "4.0");
        assert_eq!(Prediction::new(f64::NAN).to_string(), "NaN");
        assert_eq!(Prediction::new(f64::INFINITY).to_string(), "inf");
        assert_eq!(Prediction::new(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn empty_coordinate_list_is_rejected() {
        assert!(CoordinateList::new(Vec::new()).is_none());
        let list = CoordinateList::new(vec![Point::new(2.0, 1.0), Point::new(-1.0, 3.0)]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.xs(), vec![2.0, -1.0]);
        assert_eq!(list.ys(), vec![1.0, 3.0]);
    }

    #[test]
    fn poly_model_evaluates_ascending_coefficients() {
        let model = PolyModel {
            degree: Degree::new(2).unwrap(),
            coefficients: vec![1.0, -0.5, 2.0],
        };
        assert!((model.predict(2.0) - 8.0).abs() < 1e-12);
    }
}
