//! Lagrange interpolation polynomial and its derivative.

use crate::error::{check_distinct, check_shape, ApproximationError, Result};
use crate::error_analysis::{max_absolute_error, PlotSeries};
use crate::node::{x_range, NodeSet};

/// Value at `x_eval` of the polynomial through `(x_points[i], y_points[i])`.
///
/// # Errors
/// Error is returned when lengths differ, no node is given or two x values coincide.
///
/// # Example
/// ```
/// use generic_approximation::lagrange;
/// use assert_approx_eq::assert_approx_eq;
///
/// let value = lagrange::interpolate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], 1.5).unwrap();
/// assert_approx_eq!(value, 2.25, 1e-12);
/// ```
pub fn interpolate(x_points: &[f64], y_points: &[f64], x_eval: f64) -> Result<f64> {
    Ok(Lagrange::new(x_points.to_vec(), y_points.to_vec())?.evaluate(x_eval))
}

/// Derivative at `x_eval` of the polynomial through `(x_points[i], y_points[i])`.
///
/// # Errors
/// Same as [interpolate].
pub fn derivative(x_points: &[f64], y_points: &[f64], x_eval: f64) -> Result<f64> {
    Ok(Lagrange::new(x_points.to_vec(), y_points.to_vec())?.derivative(x_eval))
}

/// Maximum of `|interpolant - target|` over `num_eval_points` samples spanning the node range.
/// `0.0` when all nodes share one x. Use [crate::DEFAULT_SAMPLES] for the usual grid.
pub fn max_error<F: Fn(f64) -> f64>(
    x_points: &[f64],
    y_points: &[f64],
    target: F,
    num_eval_points: usize,
) -> Result<f64> {
    Ok(Lagrange::new(x_points.to_vec(), y_points.to_vec())?.max_error(target, num_eval_points))
}

/// Validated Lagrange interpolant with the reciprocal node differences
/// `1 / (x_i - x_j)` computed once.
///
/// Every basis polynomial is accumulated one bounded ratio
/// `(x - x_j) / (x_i - x_j)` at a time, so wide node ranges stay finite.
#[derive(Debug, Clone)]
pub struct Lagrange {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Row-major `n x n`, `reciprocals[i * n + j] = 1 / (x_i - x_j)`, zero on the diagonal.
    reciprocals: Vec<f64>,
    min_x: f64,
    max_x: f64,
}

impl Lagrange {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        check_shape(&x, &y)?;
        check_distinct(&x)?;
        let (min_x, max_x) = match x_range(&x) {
            Some(range) => range,
            None => return Err(ApproximationError::insufficient_nodes(1, 0)),
        };

        let n = x.len();
        let mut reciprocals = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if j != i {
                    reciprocals[i * n + j] = 1.0 / (x[i] - x[j]);
                }
            }
        }

        Ok(Lagrange { x, y, reciprocals, min_x, max_x })
    }

    pub fn from_nodes(nodes: &NodeSet) -> Result<Self> {
        Lagrange::new(nodes.x().to_vec(), nodes.y().to_vec())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Smallest and largest node x.
    pub fn range(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.warn_if_outside(x);
        self.evaluate_unchecked(x)
    }

    pub fn evaluate_batch(&self, x_vector: &[f64]) -> Vec<f64> {
        let outside = x_vector
            .iter()
            .filter(|x| **x < self.min_x || **x > self.max_x)
            .count();
        if outside > 0 {
            log::warn!(
                "{outside} of {} points are outside the interpolation range [{}, {}]",
                x_vector.len(),
                self.min_x,
                self.max_x
            );
        }
        x_vector.iter().map(|x| self.evaluate_unchecked(*x)).collect()
    }

    pub fn derivative(&self, x: f64) -> f64 {
        self.warn_if_outside(x);
        let n = self.x.len();
        let mut result = 0.0;
        for i in 0..n {
            let row = &self.reciprocals[i * n..(i + 1) * n];
            let mut basis_derivative = 0.0;
            for j in 0..n {
                if j == i {
                    continue;
                }
                let mut product = row[j];
                for k in 0..n {
                    if k != i && k != j {
                        product *= (x - self.x[k]) * row[k];
                    }
                }
                basis_derivative += product;
            }
            result += self.y[i] * basis_derivative;
        }
        result
    }

    pub fn max_error<F: Fn(f64) -> f64>(&self, target: F, num_eval_points: usize) -> f64 {
        max_absolute_error(
            |x| self.evaluate_unchecked(x),
            target,
            self.min_x,
            self.max_x,
            num_eval_points,
        )
    }

    /// Interpolant and target sampled over the node range.
    pub fn plot_series<F: Fn(f64) -> f64>(&self, target: F, samples: usize) -> PlotSeries {
        PlotSeries::sample(|x| self.evaluate_unchecked(x), target, self.min_x, self.max_x, samples)
    }

    fn evaluate_unchecked(&self, x: f64) -> f64 {
        let n = self.x.len();
        let mut result = 0.0;
        for i in 0..n {
            let row = &self.reciprocals[i * n..(i + 1) * n];
            let mut basis = 1.0;
            for j in 0..n {
                if j != i {
                    basis *= (x - self.x[j]) * row[j];
                }
            }
            result += self.y[i] * basis;
        }
        result
    }

    fn warn_if_outside(&self, x: f64) {
        if x < self.min_x || x > self.max_x {
            log::warn!(
                "{x} is outside the interpolation range [{}, {}]",
                self.min_x,
                self.max_x
            );
        }
    }
}
