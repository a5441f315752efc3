//! Numerical engine for teaching function approximation: Bernstein polynomial approximation,
//! Lagrange interpolation and linear, quadratic and natural cubic splines, together with the
//! maximum absolute error metric and sampled series for plotting.
//!
//! # Example
//! ```
//! use generic_approximation::{bernstein, lagrange, spline, cos_pi, Interval, NodeSet, SplineKind};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let value = bernstein::approximate(cos_pi, 0.5, 5, 0.0, 1.0).unwrap();
//! assert_approx_eq!(value, 0.0, 1e-9);
//!
//! let nodes = NodeSet::equidistant(cos_pi, Interval::new(0.0, 1.0).unwrap(), 5).unwrap();
//! let value = lagrange::interpolate(nodes.x(), nodes.y(), 0.25).unwrap();
//! assert_approx_eq!(value, cos_pi(0.25), 1e-9);
//!
//! let error = spline::max_error(nodes.x(), nodes.y(), cos_pi, SplineKind::Cubic).unwrap();
//! assert!(error < 0.05);
//! ```

mod config;
mod error;
mod error_analysis;
mod interval;
mod linalg;
mod node;
mod polynomial;
mod target;

pub mod bernstein;
pub mod lagrange;
pub mod spline;

pub use config::{SamplingConfig, SplineSolver, DEFAULT_SAMPLES};
pub use error::{ApproximationError, Result};
pub use error_analysis::{convergence, max_absolute_error, ConvergencePoint, PlotSeries};
pub use interval::{from_unit, linspace, to_unit, Interval};
pub use linalg::TridiagonalSystem;
pub use node::{Node, NodeSet};
pub use polynomial::Polynomial;
pub use spline::{Spline, SplineKind};
pub use target::cos_pi;
