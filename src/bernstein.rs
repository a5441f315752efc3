//! Bernstein polynomial approximation on an arbitrary interval.
//!
//! The degree `n` approximation of `f` on `[a, b]` is evaluated in unit coordinates
//! `x = (y - a) / (b - a)` as
//! `sum_{k=0}^{n} C(n, k) x^k (1 - x)^(n - k) f(a + (b - a) k / n)`.

use crate::config::DEFAULT_SAMPLES;
use crate::error::Result;
use crate::error_analysis::{max_absolute_error, PlotSeries};
use crate::interval::{from_unit, to_unit, Interval};

/// Binomial coefficient `C(n, k)`.
///
/// Computed exactly in integers while the intermediate products fit in `u128`, which covers
/// every `n <= 124`; beyond that the multiplicative formula is carried out in `f64`.
/// ```
/// use generic_approximation::bernstein::binomial;
///
/// assert_eq!(10.0, binomial(5, 2));
/// assert_eq!(0.0, binomial(3, 4));
/// assert_eq!(1.0, binomial(60, 0));
/// ```
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);

    let mut exact: u128 = 1;
    for i in 1..=k {
        // exact * (n - k + i) is always divisible by i
        match exact.checked_mul((n - k + i) as u128) {
            Some(product) => exact = product / i as u128,
            None => return binomial_f64(n, k),
        }
    }
    exact as f64
}

fn binomial_f64(n: usize, k: usize) -> f64 {
    (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
}

/// Degree `n` Bernstein approximation of `f` on `[a, b]`, evaluated at `y_eval`.
///
/// Points outside `[a, b]` are extrapolated with the same polynomial and reported with a
/// warning through the `log` facade.
///
/// # Errors
/// Error is returned when `a >= b`.
///
/// # Example
/// ```
/// use generic_approximation::bernstein;
/// use assert_approx_eq::assert_approx_eq;
///
/// // Bernstein polynomials reproduce linear functions exactly
/// let value = bernstein::approximate(|x| 3.0 * x - 1.0, 1.5, 4, 1.0, 2.0).unwrap();
/// assert_approx_eq!(value, 3.5, 1e-12);
///
/// assert!(bernstein::approximate(|x| x, 0.5, 4, 1.0, 1.0).is_err());
/// ```
pub fn approximate<F: Fn(f64) -> f64>(f: F, y_eval: f64, n: usize, a: f64, b: f64) -> Result<f64> {
    let interval = Interval::new(a, b)?;
    warn_if_outside(&interval, y_eval);

    let x = to_unit(y_eval, a, b)?;
    let g = |u: f64| f(from_unit(u, a, b));

    if n == 0 {
        return Ok(g(0.0));
    }

    let mut sum = 0.0;
    for k in 0..=n {
        let basis = binomial(n, k) * x.powi(k as i32) * (1.0 - x).powi((n - k) as i32);
        sum += g(k as f64 / n as f64) * basis;
    }
    log::debug!("bernstein degree {n} at {y_eval} on [{a}, {b}]: {sum}");
    Ok(sum)
}

/// Absolute difference between an approximated and a true value.
pub fn absolute_error(approx_value: f64, true_value: f64) -> f64 {
    (true_value - approx_value).abs()
}

/// Maximum absolute error of the degree `n` approximation of `f` over `[a, b]`.
pub fn max_error<F: Fn(f64) -> f64>(f: F, n: usize, a: f64, b: f64) -> Result<f64> {
    let interval = Interval::new(a, b)?;
    Ok(Bernstein::new(&f, n, interval).max_error(&f, DEFAULT_SAMPLES))
}

/// Bernstein approximation with the weighted samples `C(n, k) f(a + (b - a) k / n)`
/// computed once, for repeated evaluation.
///
/// # Example
/// ```
/// use generic_approximation::{bernstein::Bernstein, Interval};
///
/// let f = |x: f64| (std::f64::consts::PI * x).cos();
/// let approximation = Bernstein::new(f, 20, Interval::unit());
/// let values = approximation.evaluate_batch(&[0.0, 0.5, 1.0]);
/// assert!((values[0] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Bernstein {
    interval: Interval,
    degree: usize,
    weights: Vec<f64>,
}

impl Bernstein {
    pub fn new<F: Fn(f64) -> f64>(f: F, degree: usize, interval: Interval) -> Self {
        let weights = if degree == 0 {
            vec![f(interval.start())]
        } else {
            (0..=degree)
                .map(|k| binomial(degree, k) * f(interval.from_unit(k as f64 / degree as f64)))
                .collect()
        };
        Bernstein { interval, degree, weights }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn evaluate(&self, y: f64) -> f64 {
        warn_if_outside(&self.interval, y);
        self.evaluate_unchecked(y)
    }

    pub fn evaluate_batch(&self, y_vector: &[f64]) -> Vec<f64> {
        let outside = y_vector.iter().filter(|y| !self.interval.contains(**y)).count();
        if outside > 0 {
            log::warn!(
                "{outside} of {} points lie outside [{}, {}], extrapolating",
                y_vector.len(),
                self.interval.start(),
                self.interval.end()
            );
        }
        y_vector.iter().map(|y| self.evaluate_unchecked(*y)).collect()
    }

    /// Maximum absolute error against `target` on `samples` points of the interval.
    pub fn max_error<F: Fn(f64) -> f64>(&self, target: F, samples: usize) -> f64 {
        max_absolute_error(
            |y| self.evaluate_unchecked(y),
            target,
            self.interval.start(),
            self.interval.end(),
            samples,
        )
    }

    /// Approximation and target sampled on `samples` points of the interval.
    pub fn plot_series<F: Fn(f64) -> f64>(&self, target: F, samples: usize) -> PlotSeries {
        PlotSeries::sample(
            |y| self.evaluate_unchecked(y),
            target,
            self.interval.start(),
            self.interval.end(),
            samples,
        )
    }

    fn evaluate_unchecked(&self, y: f64) -> f64 {
        let x = self.interval.to_unit(y);
        let n = self.degree;
        self.weights
            .iter()
            .enumerate()
            .map(|(k, w)| w * x.powi(k as i32) * (1.0 - x).powi((n - k) as i32))
            .sum()
    }
}

fn warn_if_outside(interval: &Interval, y: f64) {
    if !interval.contains(y) {
        log::warn!(
            "{y} is outside [{}, {}], extrapolating bernstein approximation",
            interval.start(),
            interval.end()
        );
    }
}
