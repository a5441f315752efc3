//! Error metrics and sampled series shared by every approximator.

use crate::error::Result;
use crate::interval::linspace;

/// Maximum of `|interpolant(x) - target(x)|` over `num_samples` evenly spaced points of
/// `[domain_min, domain_max]`, both ends included.
///
/// Returns `0.0` for an empty grid or a range collapsed to a single point. A NaN difference
/// makes the result NaN.
///
/// # Example
///
/// ```
/// use generic_approximation::max_absolute_error;
///
/// let error = max_absolute_error(|x| x, |x| x * x, 0.0, 1.0, 1001);
/// assert!((error - 0.25).abs() < 1e-12);
/// ```
pub fn max_absolute_error<I, T>(
    interpolant: I,
    target: T,
    domain_min: f64,
    domain_max: f64,
    num_samples: usize,
) -> f64
where
    I: Fn(f64) -> f64,
    T: Fn(f64) -> f64,
{
    if domain_min == domain_max {
        return 0.0;
    }

    let mut max_error: f64 = 0.0;
    for x in linspace(domain_min, domain_max, num_samples) {
        let error = (interpolant(x) - target(x)).abs();
        if error.is_nan() {
            return f64::NAN;
        }
        max_error = max_error.max(error);
    }
    max_error
}

/// Parallel arrays of sample points, fitted values and target values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotSeries {
    pub x: Vec<f64>,
    pub fitted: Vec<f64>,
    pub target: Vec<f64>,
}

impl PlotSeries {
    /// Samples `fitted` and `target` on `num_samples` points of `[domain_min, domain_max]`.
    pub fn sample<I, T>(fitted: I, target: T, domain_min: f64, domain_max: f64, num_samples: usize) -> Self
    where
        I: Fn(f64) -> f64,
        T: Fn(f64) -> f64,
    {
        let x = linspace(domain_min, domain_max, num_samples);
        PlotSeries::from_grid(x, fitted, target)
    }

    /// Builds series on an existing grid, e.g. one already evaluated in batch.
    pub fn from_grid<I, T>(x: Vec<f64>, fitted: I, target: T) -> Self
    where
        I: Fn(f64) -> f64,
        T: Fn(f64) -> f64,
    {
        let fitted = x.iter().map(|x| fitted(*x)).collect();
        let target = x.iter().map(|x| target(*x)).collect();
        PlotSeries { x, fitted, target }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest absolute difference between fitted and target values.
    pub fn max_error(&self) -> f64 {
        self.fitted
            .iter()
            .zip(self.target.iter())
            .map(|(f, t)| (f - t).abs())
            .fold(0.0, f64::max)
    }
}

/// Error reached at one step of a convergence sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    /// Degree or node count.
    pub step: usize,
    pub error: f64,
}

/// Evaluates `error_at` for every step, in order. Stops at the first failure.
///
/// This is the progressive reveal behind convergence animations: the caller replays the
/// points at its own cadence.
///
/// # Example
///
/// ```
/// use generic_approximation::{bernstein, convergence, Interval};
///
/// let f = |x: f64| (std::f64::consts::PI * x).cos();
/// let interval = Interval::unit();
/// let sweep = convergence([1, 5, 10], |n| {
///     Ok(bernstein::Bernstein::new(f, n, interval).max_error(f, 200))
/// }).unwrap();
/// assert!(sweep[2].error < sweep[0].error);
/// ```
pub fn convergence<S, E>(steps: S, mut error_at: E) -> Result<Vec<ConvergencePoint>>
where
    S: IntoIterator<Item = usize>,
    E: FnMut(usize) -> Result<f64>,
{
    steps
        .into_iter()
        .map(|step| -> Result<ConvergencePoint> {
            Ok(ConvergencePoint { step, error: error_at(step)? })
        })
        .collect()
}
