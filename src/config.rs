//! Sampling and solver settings shared by the approximators.

/// Number of samples used for error metrics and plot series.
pub const DEFAULT_SAMPLES: usize = 1000;

/// How the natural spline second derivative system is solved, for quadratic and cubic splines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplineSolver {
    /// Thomas algorithm on the tridiagonal system.
    #[default]
    Tridiagonal,
    /// LU decomposition of the full dense matrix.
    Dense,
}

/// Settings for error evaluation, plot sampling and spline construction.
///
/// # Example
///
/// ```
/// use generic_approximation::{SplineSolver, SamplingConfig};
///
/// let config = SamplingConfig::default()
///     .with_error_samples(250)
///     .with_spline_solver(SplineSolver::Dense);
/// assert_eq!(250, config.error_samples());
/// assert_eq!(1000, config.plot_samples());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    error_samples: usize,
    plot_samples: usize,
    spline_solver: SplineSolver,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            error_samples: DEFAULT_SAMPLES,
            plot_samples: DEFAULT_SAMPLES,
            spline_solver: SplineSolver::default(),
        }
    }
}

impl SamplingConfig {
    #[must_use]
    pub fn with_error_samples(mut self, samples: usize) -> Self {
        self.error_samples = samples;
        self
    }

    #[must_use]
    pub fn with_plot_samples(mut self, samples: usize) -> Self {
        self.plot_samples = samples;
        self
    }

    #[must_use]
    pub fn with_spline_solver(mut self, solver: SplineSolver) -> Self {
        self.spline_solver = solver;
        self
    }

    pub fn error_samples(&self) -> usize {
        self.error_samples
    }

    pub fn plot_samples(&self) -> usize {
        self.plot_samples
    }

    pub fn spline_solver(&self) -> SplineSolver {
        self.spline_solver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SamplingConfig::default();
        assert_eq!(DEFAULT_SAMPLES, config.error_samples());
        assert_eq!(DEFAULT_SAMPLES, config.plot_samples());
        assert_eq!(SplineSolver::Tridiagonal, config.spline_solver());
    }

    #[test]
    fn builders() {
        let config = SamplingConfig::default()
            .with_plot_samples(64)
            .with_error_samples(10)
            .with_spline_solver(SplineSolver::Dense);
        assert_eq!(64, config.plot_samples());
        assert_eq!(10, config.error_samples());
        assert_eq!(SplineSolver::Dense, config.spline_solver());
    }
}
