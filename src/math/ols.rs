//! Least squares solver.
//!
//! We solve small problems of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - SVD handles tall, square and wide design matrices alike. For rank-deficient
//!   or under-determined systems it returns the minimum-norm solution instead of
//!   failing.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - Singular values below `max(n, k) · ε · σ_max` are treated as zero.
//! - Non-finite inputs are not an error: they produce an all-NaN β so callers
//!   can propagate the degenerate result.

use nalgebra::{DMatrix, DVector};

/// Solution of a least squares problem.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    pub beta: DVector<f64>,
    /// Number of singular values above the cutoff.
    pub rank: usize,
}

/// Solve a least squares problem using SVD.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> LeastSquares {
    let k = x.ncols();
    let degenerate = LeastSquares {
        beta: DVector::from_element(k, f64::NAN),
        rank: 0,
    };

    // SVD iteration is not guaranteed to terminate on NaN/inf entries.
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return degenerate;
    }

    let svd = x.clone().svd(true, true);
    let sigma_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    let cutoff = sigma_max * (x.nrows().max(k) as f64) * f64::EPSILON;
    let rank = svd.rank(cutoff);

    match svd.solve(y, cutoff) {
        Ok(beta) => LeastSquares { beta, rank },
        Err(_) => degenerate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let sol = solve_least_squares(&x, &y);
        assert_eq!(sol.rank, 2);
        assert!((sol.beta[0] - 2.0).abs() < 1e-10);
        assert!((sol.beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn wide_system_returns_minimum_norm_solution() {
        // One equation, two unknowns: b0 + b1 = 2 -> min-norm is (1, 1).
        let x = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[2.0]);

        let sol = solve_least_squares(&x, &y);
        assert_eq!(sol.rank, 1);
        assert!((sol.beta[0] - 1.0).abs() < 1e-10, "got {}", sol.beta[0]);
        assert!((sol.beta[1] - 1.0).abs() < 1e-10, "got {}", sol.beta[1]);
    }

    #[test]
    fn non_finite_inputs_give_nan_solution() {
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 1.0, f64::NAN]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);

        let sol = solve_least_squares(&x, &y);
        assert_eq!(sol.rank, 0);
        assert!(sol.beta.iter().all(|b| b.is_nan()));
    }
}
