//! The 2D Rosenbrock test function
//!
//! This crate provides the objective used by the DE playground:
//!
//! - `rosenbrock(x, y)`: scalar evaluation with the standard a=1, b=100
//! - `rosenbrock_terms(x, y)`: evaluation decomposed into its sub-terms,
//!   used by display layers to render a worked calculation
//! - `rosenbrock_grid`: sampled grid of values for contour rendering
//!
//! The function is `f(x, y) = (a - x)^2 + b (y - x^2)^2`, smooth and
//! finite everywhere, with its global minimum f = 0 at (a, a^2).
//!
//! # Example
//!
//! ```rust
//! use deviz_rosenbrock::{rosenbrock, rosenbrock_terms};
//!
//! assert_eq!(rosenbrock(1.0, 1.0), 0.0);
//!
//! let t = rosenbrock_terms(0.0, 0.0);
//! assert_eq!(t.value, t.term1 + t.term2);
//! ```

use ndarray::Array2;
use serde::Serialize;

/// Default `a` parameter; the minimum sits at (a, a^2).
pub const DEFAULT_A: f64 = 1.0;
/// Default `b` parameter, the classic narrow-valley weight.
pub const DEFAULT_B: f64 = 100.0;
/// Location of the global minimum for the default parameters.
pub const GLOBAL_MINIMUM: (f64, f64) = (1.0, 1.0);

/// One evaluation of the Rosenbrock function, decomposed for display.
///
/// `value = term1 + term2`, `term1 = (a - x)^2`, `inner = y - x^2`,
/// `term2 = b * inner^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosenbrockTerms {
    pub value: f64,
    pub term1: f64,
    pub inner: f64,
    pub term2: f64,
    pub a: f64,
    pub b: f64,
}

/// Evaluate the Rosenbrock function with explicit parameters.
pub fn rosenbrock_terms_with(x: f64, y: f64, a: f64, b: f64) -> RosenbrockTerms {
    let term1 = (a - x).powi(2);
    let inner = y - x * x;
    let term2 = b * inner * inner;
    RosenbrockTerms { value: term1 + term2, term1, inner, term2, a, b }
}

/// Evaluate the Rosenbrock function with the standard a=1, b=100.
pub fn rosenbrock_terms(x: f64, y: f64) -> RosenbrockTerms {
    rosenbrock_terms_with(x, y, DEFAULT_A, DEFAULT_B)
}

/// Scalar convenience wrapper around [`rosenbrock_terms`].
pub fn rosenbrock(x: f64, y: f64) -> f64 {
    rosenbrock_terms(x, y).value
}

/// Sample the objective over a rectangular grid for contour rendering.
///
/// Returns the x axis (`nx` points), the y axis (`ny` points) and a
/// `(ny, nx)` matrix where `z[[iy, ix]] = f(x[ix], y[iy])`, the row
/// layout contour plotters expect.
pub fn rosenbrock_grid(
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    nx: usize,
    ny: usize,
) -> (Vec<f64>, Vec<f64>, Array2<f64>) {
    let xs: Vec<f64> = (0..nx)
        .map(|i| min_x + (max_x - min_x) * i as f64 / (nx - 1).max(1) as f64)
        .collect();
    let ys: Vec<f64> = (0..ny)
        .map(|j| min_y + (max_y - min_y) * j as f64 / (ny - 1).max(1) as f64)
        .collect();
    let z = Array2::from_shape_fn((ny, nx), |(iy, ix)| rosenbrock(xs[ix], ys[iy]));
    (xs, ys, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_matches_closed_form() {
        for &(x, y) in &[(0.0, 0.0), (-1.2, 1.0), (2.0, -3.0), (0.5, 0.25)] {
            let expected = (1.0 - x) * (1.0 - x) + 100.0 * (y - x * x) * (y - x * x);
            assert_eq!(rosenbrock(x, y), expected, "mismatch at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_global_minimum_is_exact_zero() {
        let (x, y) = GLOBAL_MINIMUM;
        assert_eq!(rosenbrock(x, y), 0.0);
        // the valley floor y = x^2 zeroes the second term only
        let t = rosenbrock_terms(0.5, 0.25);
        assert_eq!(t.term2, 0.0);
        assert!(t.value > 0.0);
    }

    #[test]
    fn test_terms_decomposition() {
        let t = rosenbrock_terms_with(-0.3, 1.7, 1.0, 100.0);
        assert_eq!(t.value, t.term1 + t.term2);
        assert_eq!(t.term2, t.b * t.inner * t.inner);
        assert_eq!(t.inner, 1.7 - 0.09);
    }

    #[test]
    fn test_custom_parameters_shift_minimum() {
        // minimum of the general form is at (a, a^2)
        let t = rosenbrock_terms_with(2.0, 4.0, 2.0, 100.0);
        assert_eq!(t.value, 0.0);
    }

    #[test]
    fn test_grid_shape_and_corners() {
        let (xs, ys, z) = rosenbrock_grid(-2.0, 2.0, -1.0, 3.0, 5, 9);
        assert_eq!(xs.len(), 5);
        assert_eq!(ys.len(), 9);
        assert_eq!(z.dim(), (9, 5));
        assert_eq!(xs[0], -2.0);
        assert_eq!(*xs.last().unwrap(), 2.0);
        assert_eq!(z[[0, 0]], rosenbrock(-2.0, -1.0));
        assert_eq!(z[[8, 4]], rosenbrock(2.0, 3.0));
    }
}
