//! Polynomial least-squares fitting.
//!
//! Given observations `(x_i, y_i)` and a degree `d`, we solve
//!
//! ```text
//! minimize Σ (y_i - Σ_j c_j x_i^j)^2      j = 0..=d
//! ```
//!
//! on the Vandermonde design matrix. Each column is scaled to unit norm before
//! the SVD solve and the coefficients are unscaled afterwards, which keeps
//! higher powers of large x-values from dominating the singular spectrum.
//!
//! Degenerate inputs are not errors here:
//! - fewer distinct x-values than `d + 1` gives the minimum-norm solution
//! - non-finite data gives NaN coefficients
//!
//! The only rejection is size: a design matrix above [`MAX_DESIGN_ENTRIES`]
//! is never allocated.

use crate::domain::{CoordinateList, Degree, FitQuality, FitResult, PolyModel};
use crate::error::FitError;
use crate::math::{solve_least_squares, vandermonde};

/// Upper bound on `points × (degree + 1)`, i.e. 32 MiB of `f64` per matrix.
///
/// The SVD holds a few matrices of this size at once. Anything larger is
/// reported as malformed input instead of aborting on allocation failure.
pub const MAX_DESIGN_ENTRIES: usize = 1 << 22;

/// Number of design-matrix entries, or `None` when it exceeds the limit.
pub fn design_entries(n_points: usize, degree: Degree) -> Option<usize> {
    n_points
        .checked_mul(degree.n_coefficients())
        .filter(|&entries| entries <= MAX_DESIGN_ENTRIES)
}

/// Fit a polynomial of the given degree to the points.
pub fn fit_polynomial(points: &CoordinateList, degree: Degree) -> Result<FitResult, FitError> {
    let k = degree.n_coefficients();
    if design_entries(points.len(), degree).is_none() {
        tracing::warn!(
            degree = degree.get(),
            points = points.len(),
            limit = MAX_DESIGN_ENTRIES,
            "design matrix too large"
        );
        return Err(FitError::MalformedInput);
    }

    let xs = points.xs();
    let ys = nalgebra::DVector::from_vec(points.ys());

    let mut design = vandermonde(&xs, k);
    let scales = column_scales(&design);
    for (j, &s) in scales.iter().enumerate() {
        design.column_mut(j).iter_mut().for_each(|v| *v /= s);
    }

    let solution = solve_least_squares(&design, &ys);
    let coefficients: Vec<f64> = solution
        .beta
        .iter()
        .zip(&scales)
        .map(|(b, s)| b / s)
        .collect();

    if solution.rank < k {
        tracing::warn!(
            rank = solution.rank,
            coefficients = k,
            points = points.len(),
            "polynomial fit is rank deficient"
        );
    }

    let model = PolyModel {
        degree,
        coefficients,
    };
    let quality = fit_quality(points, &model, solution.rank);

    tracing::debug!(
        degree = degree.get(),
        points = points.len(),
        sse = quality.sse,
        "fitted polynomial"
    );

    Ok(FitResult { model, quality })
}

/// Euclidean norm of each design column; an all-zero column keeps scale 1.
fn column_scales(design: &nalgebra::DMatrix<f64>) -> Vec<f64> {
    design
        .column_iter()
        .map(|col| {
            let norm = col.norm();
            if norm == 0.0 { 1.0 } else { norm }
        })
        .collect()
}

fn fit_quality(points: &CoordinateList, model: &PolyModel, rank: usize) -> FitQuality {
    let n = points.len();
    let sse: f64 = points
        .points()
        .iter()
        .map(|p| {
            let r = p.y - model.predict(p.x);
            r * r
        })
        .sum();
    let rmse = (sse / n as f64).sqrt();

    FitQuality { sse, rmse, n, rank }
}
