//! Error types for approximation and interpolation.

use thiserror::Error;

/// A specialized Result type for approximation operations.
pub type Result<T> = std::result::Result<T, ApproximationError>;

/// Errors returned by the approximation engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApproximationError {
    /// Interval is degenerate or inverted, or nodes are not ordered.
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of the violated domain requirement.
        reason: String,
    },

    /// x and y coordinate sequences differ in length.
    #[error("Shape mismatch: {x_len} x values and {y_len} y values")]
    Shape {
        /// Number of x coordinates.
        x_len: usize,
        /// Number of y coordinates.
        y_len: usize,
    },

    /// Fewer nodes than the method requires.
    #[error("Insufficient nodes: need at least {required}, got {actual}")]
    InsufficientNodes {
        /// Minimum required nodes.
        required: usize,
        /// Actual number of nodes.
        actual: usize,
    },

    /// Two nodes share the same x coordinate.
    #[error("Numerical degeneracy: node {index} repeats x = {x}")]
    NumericalDegeneracy {
        /// Index of the repeated node.
        index: usize,
        /// The repeated x coordinate.
        x: f64,
    },

    /// Coefficient system could not be solved.
    #[error("Singular system: {reason}")]
    SingularSystem {
        /// Description of the failure.
        reason: String,
    },

    /// Name does not match any spline kind.
    #[error("Unknown spline kind '{name}', expected linear, quadratic or cubic")]
    UnknownSplineKind {
        /// The rejected name.
        name: String,
    },
}

impl ApproximationError {
    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Creates a shape error.
    #[must_use]
    pub fn shape(x_len: usize, y_len: usize) -> Self {
        Self::Shape { x_len, y_len }
    }

    /// Creates an insufficient nodes error.
    #[must_use]
    pub fn insufficient_nodes(required: usize, actual: usize) -> Self {
        Self::InsufficientNodes { required, actual }
    }

    /// Creates a singular system error.
    #[must_use]
    pub fn singular(reason: impl Into<String>) -> Self {
        Self::SingularSystem {
            reason: reason.into(),
        }
    }
}

/// Checks that both coordinate sequences have the same length.
pub(crate) fn check_shape(x_points: &[f64], y_points: &[f64]) -> Result<()> {
    if x_points.len() != y_points.len() {
        return Err(ApproximationError::shape(x_points.len(), y_points.len()));
    }
    Ok(())
}

/// Checks that no two x coordinates coincide, regardless of order.
pub(crate) fn check_distinct(x_points: &[f64]) -> Result<()> {
    for (i, xi) in x_points.iter().enumerate() {
        if x_points[..i].iter().any(|xj| xj == xi) {
            return Err(ApproximationError::NumericalDegeneracy { index: i, x: *xi });
        }
    }
    Ok(())
}
