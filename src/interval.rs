use crate::error::{ApproximationError, Result};

/// Maps `y` from `[a, b]` onto the unit interval.
///
/// Ordering of `a` and `b` is not checked. A degenerate interval `[a, a]` maps `a` to `0.0`
/// and rejects every other point.
/// # Example
/// ```
/// use generic_approximation::to_unit;
///
/// assert_eq!(0.25, to_unit(3.0, 2.0, 6.0).unwrap());
/// assert_eq!(0.0, to_unit(1.0, 1.0, 1.0).unwrap());
/// assert!(to_unit(2.0, 1.0, 1.0).is_err());
/// ```
pub fn to_unit(y: f64, a: f64, b: f64) -> Result<f64> {
    if a == b {
        if y == a {
            return Ok(0.0);
        }
        return Err(ApproximationError::domain(format!(
            "degenerate interval [{a}, {b}] cannot map {y}"
        )));
    }
    Ok((y - a) / (b - a))
}

/// Maps `x` from the unit interval onto `[a, b]`. Defined for every real `x`.
pub fn from_unit(x: f64, a: f64, b: f64) -> f64 {
    a + (b - a) * x
}

/// `n` evenly spaced samples from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = end;
            samples
        }
    }
}

/// Closed interval `[start, end]` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// # Errors
    /// Error is returned when `start >= end` or a bound is not finite.
    /// ```
    /// use generic_approximation::Interval;
    ///
    /// assert!(Interval::new(0.0, 1.0).is_ok());
    /// assert!(Interval::new(1.0, 1.0).is_err());
    /// assert!(Interval::new(2.0, 1.0).is_err());
    /// ```
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ApproximationError::domain(format!(
                "invalid interval: bounds must be finite, got [{start}, {end}]"
            )));
        }
        if start >= end {
            return Err(ApproximationError::domain(format!(
                "invalid interval: start must be less than end, got [{start}, {end}]"
            )));
        }
        Ok(Interval { start, end })
    }

    /// The unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Interval { start: 0.0, end: 1.0 }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    pub fn to_unit(&self, y: f64) -> f64 {
        (y - self.start) / self.width()
    }

    pub fn from_unit(&self, x: f64) -> f64 {
        from_unit(x, self.start, self.end)
    }

    /// `n` evenly spaced samples covering the interval.
    pub fn samples(&self, n: usize) -> Vec<f64> {
        linspace(self.start, self.end, n)
    }
}
