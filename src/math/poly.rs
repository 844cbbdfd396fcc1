//! Polynomial basis helpers.
//!
//! Coefficients are stored in ascending power order: `c[0] + c[1] x + c[2] x^2 + ...`.

use nalgebra::DMatrix;

/// Fill one Vandermonde row `[1, x, x^2, ...]` in place.
pub fn fill_vandermonde_row(row: &mut [f64], x: f64) {
    let mut power = 1.0;
    for slot in row.iter_mut() {
        *slot = power;
        power *= x;
    }
}

/// Build the `n × k` Vandermonde design matrix for `xs`.
pub fn vandermonde(xs: &[f64], k: usize) -> DMatrix<f64> {
    let mut out = DMatrix::zeros(xs.len(), k);
    let mut row = vec![0.0; k];
    for (i, &x) in xs.iter().enumerate() {
        fill_vandermonde_row(&mut row, x);
        for (j, &v) in row.iter().enumerate() {
            out[(i, j)] = v;
        }
    }
    out
}

/// Evaluate a polynomial with Horner's rule.
///
/// An empty coefficient slice is the zero polynomial.
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
