use std::{fmt::Display, str::FromStr};

use crate::config::{SamplingConfig, SplineSolver, DEFAULT_SAMPLES};
use crate::error::{check_shape, ApproximationError, Result};
use crate::error_analysis::{max_absolute_error, PlotSeries};
use crate::linalg::TridiagonalSystem;
use crate::node::NodeSet;
use crate::polynomial::Polynomial;

/// Piecewise polynomial family of a [Spline].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplineKind {
    /// Straight segments between neighbouring nodes.
    Linear,
    /// Quadratic segments built from natural spline second derivatives.
    Quadratic,
    /// Natural cubic spline, second derivative zero at both ends.
    Cubic,
}

impl SplineKind {
    pub const ALL: [SplineKind; 3] = [SplineKind::Linear, SplineKind::Quadratic, SplineKind::Cubic];

    /// Smallest number of nodes the kind can be built from.
    pub fn minimum_nodes(&self) -> usize {
        match self {
            SplineKind::Linear => 2,
            SplineKind::Quadratic => 3,
            SplineKind::Cubic => 4,
        }
    }
}

impl Display for SplineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SplineKind::Linear => "linear",
            SplineKind::Quadratic => "quadratic",
            SplineKind::Cubic => "cubic",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SplineKind {
    type Err = ApproximationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(SplineKind::Linear),
            "quadratic" => Ok(SplineKind::Quadratic),
            "cubic" => Ok(SplineKind::Cubic),
            _ => Err(ApproximationError::UnknownSplineKind { name: s.to_string() }),
        }
    }
}

/// Value at `x_eval` of the spline of `kind` through the nodes.
///
/// Coefficients are rebuilt on every call, use [Spline] or [evaluate_batch] for many points.
///
/// # Errors
/// Error is returned when lengths differ, there are fewer nodes than `kind` requires or
/// `x_points` is not strictly ascending.
///
/// # Example
/// ```
/// use generic_approximation::{spline, SplineKind};
///
/// let value = spline::evaluate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 0.5, SplineKind::Linear).unwrap();
/// assert_eq!(0.5, value);
///
/// assert!(spline::evaluate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 0.5, SplineKind::Cubic).is_err());
/// ```
pub fn evaluate(x_points: &[f64], y_points: &[f64], x_eval: f64, kind: SplineKind) -> Result<f64> {
    Ok(Spline::new(x_points.to_vec(), y_points.to_vec(), kind)?.evaluate(x_eval))
}

/// Values at every point of `x_vector`, building the coefficients once.
pub fn evaluate_batch(
    x_points: &[f64],
    y_points: &[f64],
    x_vector: &[f64],
    kind: SplineKind,
) -> Result<Vec<f64>> {
    Ok(Spline::new(x_points.to_vec(), y_points.to_vec(), kind)?.evaluate_batch(x_vector))
}

/// Maximum absolute error against `target` on 1000 samples spanning the nodes.
pub fn max_error<F: Fn(f64) -> f64>(
    x_points: &[f64],
    y_points: &[f64],
    target: F,
    kind: SplineKind,
) -> Result<f64> {
    Ok(Spline::new(x_points.to_vec(), y_points.to_vec(), kind)?.max_error(target, DEFAULT_SAMPLES))
}

/// Piecewise polynomial interpolant over strictly ascending nodes.
///
/// Segment `i` covers `[x_i, x_{i+1}]`; points left of the first node use segment `0` and
/// points right of the last node use the last segment.
#[derive(Debug, Clone)]
pub struct Spline {
    kind: SplineKind,
    x: Vec<f64>,
    polynomials: Vec<Polynomial>,
}

impl Spline {
    pub fn new(x: Vec<f64>, y: Vec<f64>, kind: SplineKind) -> Result<Self> {
        Spline::with_solver(x, y, kind, SplineSolver::default())
    }

    /// Builds the spline solving the second derivative system with `solver`.
    pub fn with_solver(x: Vec<f64>, y: Vec<f64>, kind: SplineKind, solver: SplineSolver) -> Result<Self> {
        check_nodes(&x, &y, kind)?;

        let polynomials = match kind {
            SplineKind::Linear => linear_polynomials(&x, &y),
            SplineKind::Quadratic => {
                let c = second_derivatives(&x, &y, solver)?;
                quadratic_polynomials(&x, &y, &c)
            }
            SplineKind::Cubic => {
                let m = second_derivatives(&x, &y, solver)?;
                cubic_polynomials(&x, &y, &m)
            }
        };
        log::debug!("built {kind} spline with {} segments", polynomials.len());

        Ok(Spline { kind, x, polynomials })
    }

    /// Builds the spline with the solver selected in `config`.
    pub fn with_config(x: Vec<f64>, y: Vec<f64>, kind: SplineKind, config: &SamplingConfig) -> Result<Self> {
        Spline::with_solver(x, y, kind, config.spline_solver())
    }

    /// Builds the spline from a node set in ascending x order.
    pub fn from_node_set(nodes: &NodeSet, kind: SplineKind) -> Result<Self> {
        let sorted = nodes.sorted();
        Spline::new(sorted.x().to_vec(), sorted.y().to_vec(), kind)
    }

    pub fn kind(&self) -> SplineKind {
        self.kind
    }

    /// Segment polynomials, in powers of `x - x_i`.
    pub fn segments(&self) -> &[Polynomial] {
        &self.polynomials
    }

    /// First and last node x.
    pub fn range(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        if !self.is_in_range(x) {
            let (min_x, max_x) = self.range();
            log::warn!("{x} is outside [{min_x}, {max_x}], extrapolating {} spline", self.kind);
        }
        let index = self.find_segment_index(x);
        self.polynomials[index].evaluate(x)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        if !self.is_in_range(x) {
            let (min_x, max_x) = self.range();
            log::warn!("{x} is outside [{min_x}, {max_x}], extrapolating {} spline derivative", self.kind);
        }
        let index = self.find_segment_index(x);
        self.polynomials[index].derivative(x)
    }

    pub fn evaluate_batch(&self, x_vector: &[f64]) -> Vec<f64> {
        let outside = x_vector.iter().filter(|x| !self.is_in_range(**x)).count();
        if outside > 0 {
            log::warn!("{outside} of {} points extrapolated by {} spline", x_vector.len(), self.kind);
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for x in x_vector {
            index = self.find_segment_index_with_hint(index, *x);
            results.push(self.polynomials[index].evaluate(*x));
        }
        results
    }

    pub fn max_error<F: Fn(f64) -> f64>(&self, target: F, samples: usize) -> f64 {
        let (min_x, max_x) = self.range();
        max_absolute_error(
            |x| self.polynomials[self.find_segment_index(x)].evaluate(x),
            target,
            min_x,
            max_x,
            samples,
        )
    }

    /// Spline and target sampled over the node range, evaluated in batch.
    pub fn plot_series<F: Fn(f64) -> f64>(&self, target: F, samples: usize) -> PlotSeries {
        let (min_x, max_x) = self.range();
        let x = crate::interval::linspace(min_x, max_x, samples);
        let fitted = self.evaluate_batch(&x);
        let target = x.iter().map(|x| target(*x)).collect();
        PlotSeries { x, fitted, target }
    }

    fn is_in_range(&self, x: f64) -> bool {
        let (min_x, max_x) = self.range();
        min_x <= x && x <= max_x
    }

    /// Rightmost insertion point minus one, clamped to a valid segment.
    fn find_segment_index(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.x.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.x[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_segment_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_segment(index_hint, x) {
            return index_hint;
        }
        if index_hint + 1 < self.polynomials.len() && self.is_in_segment(index_hint + 1, x) {
            return index_hint + 1;
        }
        self.find_segment_index(x)
    }

    fn is_in_segment(&self, index: usize, x: f64) -> bool {
        let last = self.polynomials.len() - 1;
        (index == 0 || self.x[index] <= x) && (index == last || x < self.x[index + 1])
    }
}

fn check_nodes(x: &[f64], y: &[f64], kind: SplineKind) -> Result<()> {
    check_shape(x, y)?;

    let required = kind.minimum_nodes();
    if x.len() < required {
        return Err(ApproximationError::insufficient_nodes(required, x.len()));
    }

    for (i, pair) in x.windows(2).enumerate() {
        if pair[1] == pair[0] {
            return Err(ApproximationError::NumericalDegeneracy { index: i + 1, x: pair[1] });
        }
        if !(pair[1] > pair[0]) {
            return Err(ApproximationError::domain(format!(
                "x values must be sorted ascending, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}

fn linear_polynomials(x: &[f64], y: &[f64]) -> Vec<Polynomial> {
    (0..x.len() - 1)
        .map(|i| {
            let slope = (y[i + 1] - y[i]) / (x[i + 1] - x[i]);
            Polynomial::new(x[i], vec![y[i], slope])
        })
        .collect()
}

/// Natural spline second derivatives at every node:
/// `h_{i-1} c_{i-1} + 2 (h_{i-1} + h_i) c_i + h_i c_{i+1} = 6 (d_i - d_{i-1})`
/// for interior nodes, `c_0 = c_{n-1} = 0`.
fn second_derivatives(x: &[f64], y: &[f64], solver: SplineSolver) -> Result<Vec<f64>> {
    let n = x.len();
    let mut system = TridiagonalSystem::identity(n);

    for i in 1..n - 1 {
        let h_prev = x[i] - x[i - 1];
        let h = x[i + 1] - x[i];
        let slope_prev = (y[i] - y[i - 1]) / h_prev;
        let slope = (y[i + 1] - y[i]) / h;
        system.set_row(i, h_prev, 2.0 * (h_prev + h), h, 6.0 * (slope - slope_prev));
    }

    match solver {
        SplineSolver::Tridiagonal => system.solve(),
        SplineSolver::Dense => system.solve_dense(),
    }
}

/// `y_i + b_i dx + c_i dx^2 / 2` with `b_i` chosen so the segment ends at `y_{i+1}`.
fn quadratic_polynomials(x: &[f64], y: &[f64], c: &[f64]) -> Vec<Polynomial> {
    (0..x.len() - 1)
        .map(|i| {
            let h = x[i + 1] - x[i];
            let b = (y[i + 1] - y[i]) / h - c[i] * h / 2.0;
            Polynomial::new(x[i], vec![y[i], b, c[i] / 2.0])
        })
        .collect()
}

fn cubic_polynomials(x: &[f64], y: &[f64], m: &[f64]) -> Vec<Polynomial> {
    (0..x.len() - 1)
        .map(|i| {
            let h = x[i + 1] - x[i];
            let b = (y[i + 1] - y[i]) / h - h * (2.0 * m[i] + m[i + 1]) / 6.0;
            let d = (m[i + 1] - m[i]) / (6.0 * h);
            Polynomial::new(x[i], vec![y[i], b, m[i] / 2.0, d])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;
    use rand::Rng;
    use std::f64::consts::PI;

    use super::*;
    use crate::interval::Interval;

    fn cos_pi(x: f64) -> f64 {
        (PI * x).cos()
    }

    #[test]
    fn kind_names() {
        for kind in SplineKind::ALL {
            assert_eq!(kind, kind.to_string().parse::<SplineKind>().unwrap());
        }
        assert_eq!(SplineKind::Cubic, " Cubic ".parse::<SplineKind>().unwrap());
        assert_eq!(
            Err(ApproximationError::UnknownSplineKind { name: "bezier".to_string() }),
            "bezier".parse::<SplineKind>()
        );
        assert_eq!(2, SplineKind::Linear.minimum_nodes());
        assert_eq!(3, SplineKind::Quadratic.minimum_nodes());
        assert_eq!(4, SplineKind::Cubic.minimum_nodes());
    }

    #[test]
    fn linear_between_nodes() {
        let x_points = [0.0, 1.0, 2.0];
        let y_points = [0.0, 1.0, 0.0];
        let eps = 1e-12;

        assert_approx_eq!(evaluate(&x_points, &y_points, 0.5, SplineKind::Linear).unwrap(), 0.5, eps);
        assert_approx_eq!(evaluate(&x_points, &y_points, 1.5, SplineKind::Linear).unwrap(), 0.5, eps);
        for i in 0..3 {
            let value = evaluate(&x_points, &y_points, x_points[i], SplineKind::Linear).unwrap();
            assert_approx_eq!(value, y_points[i], eps);
        }
    }

    #[test]
    fn linear_extrapolates_edge_segments() {
        let spline = Spline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0], SplineKind::Linear).unwrap();
        assert_approx_eq!(spline.evaluate(-1.0), -1.0, 1e-12);
        assert_approx_eq!(spline.evaluate(3.0), -1.0, 1e-12);
    }

    #[test]
    fn quadratic_exact_at_nodes() {
        let x_points = vec![0.0, 1.0, 2.0, 3.0];
        let y_points = vec![0.0, 1.0, 4.0, 9.0];
        let spline = Spline::new(x_points.clone(), y_points.clone(), SplineKind::Quadratic).unwrap();

        for i in 0..x_points.len() {
            assert_approx_eq!(spline.evaluate(x_points[i]), y_points[i], 1e-9);
        }
        // c = [0, 2.4, 2.4, 0]
        assert_approx_eq!(spline.evaluate(0.5), 0.5, 1e-12);
        assert_approx_eq!(spline.evaluate(1.5), 2.2, 1e-12);
        assert_approx_eq!(spline.segments()[1].coefficients()[2], 1.2, 1e-12);
    }

    #[test]
    fn dense_and_tridiagonal_solves_agree() {
        let mut rng = rand::thread_rng();
        let mut x = 0.0;
        let mut x_points = Vec::new();
        for _ in 0..15 {
            x += rng.gen_range(0.1..1.0);
            x_points.push(x);
        }
        let y_points: Vec<f64> = x_points.iter().map(|_| rng.gen_range(-5.0..5.0)).collect();

        for kind in [SplineKind::Quadratic, SplineKind::Cubic] {
            let thomas = Spline::with_solver(x_points.clone(), y_points.clone(), kind, SplineSolver::Tridiagonal)
                .unwrap();
            let dense = Spline::with_solver(x_points.clone(), y_points.clone(), kind, SplineSolver::Dense)
                .unwrap();
            let probes = crate::interval::linspace(x_points[0] - 0.5, x + 0.5, 200);
            let a = thomas.evaluate_batch(&probes);
            let b = dense.evaluate_batch(&probes);
            for i in 0..probes.len() {
                assert_approx_eq!(a[i], b[i], 1e-8);
            }
        }
    }

    #[test]
    fn cubic_matches_natural_spline_reference() {
        // scipy.interpolate.CubicSpline(x, y, bc_type='natural')
        let spline = Spline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0], SplineKind::Cubic).unwrap();
        assert_approx_eq!(spline.evaluate(0.5), 0.35, 1e-12);
        assert_approx_eq!(spline.evaluate(1.5), 2.2, 1e-12);
        assert_approx_eq!(spline.evaluate(-1.0), -1.0, 1e-12);

        let spline = Spline::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 1.0, 0.0, 1.0, 0.0],
            SplineKind::Cubic,
        )
        .unwrap();
        assert_approx_eq!(spline.evaluate(0.5), 43.0 / 56.0, 1e-12);
        assert_approx_eq!(spline.evaluate(3.5), 43.0 / 56.0, 1e-12);
    }

    #[test]
    fn cubic_is_natural_and_smooth() {
        let interval = Interval::new(-1.0, 2.0).unwrap();
        let nodes = NodeSet::equidistant(cos_pi, interval, 9).unwrap();
        let spline = Spline::from_node_set(&nodes, SplineKind::Cubic).unwrap();

        for node in nodes.nodes() {
            assert_approx_eq!(spline.evaluate(node.get_x()), node.get_y(), 1e-9);
        }

        let segments = spline.segments();
        assert_approx_eq!(segments[0].coefficients()[2], 0.0, 1e-12);

        let h = 3.0 / 8.0;
        for i in 0..segments.len() - 1 {
            let left = &segments[i];
            let right = &segments[i + 1];
            let knot = right.origin();
            assert_approx_eq!(left.derivative(knot), right.derivative(knot), 1e-9);
            // second derivative of left piece at its right end
            let c = left.coefficients();
            assert_approx_eq!(2.0 * c[2] + 6.0 * c[3] * h, 2.0 * right.coefficients()[2], 1e-9);
        }
        let last = segments[segments.len() - 1].coefficients();
        assert_approx_eq!(2.0 * last[2] + 6.0 * last[3] * h, 0.0, 1e-9);
    }

    #[test]
    fn insufficient_nodes() {
        assert!(matches!(
            evaluate(&[0.0, 1.0], &[0.0, 1.0], 0.5, SplineKind::Quadratic),
            Err(ApproximationError::InsufficientNodes { required: 3, actual: 2 })
        ));
        assert!(matches!(
            evaluate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 0.5, SplineKind::Cubic),
            Err(ApproximationError::InsufficientNodes { required: 4, actual: 3 })
        ));
        assert!(matches!(
            evaluate(&[0.0], &[0.0], 0.5, SplineKind::Linear),
            Err(ApproximationError::InsufficientNodes { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn invalid_nodes() {
        assert!(matches!(
            evaluate(&[0.0, 1.0, 2.0], &[0.0, 1.0], 0.5, SplineKind::Linear),
            Err(ApproximationError::Shape { .. })
        ));
        assert!(matches!(
            evaluate(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], 0.5, SplineKind::Linear),
            Err(ApproximationError::Domain { .. })
        ));
        assert!(matches!(
            evaluate(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0], 0.5, SplineKind::Linear),
            Err(ApproximationError::NumericalDegeneracy { index: 2, .. })
        ));
    }

    #[test]
    fn from_unsorted_node_set() {
        let nodes = NodeSet::new(vec![2.0, 0.0, 1.0], vec![0.0, 0.0, 1.0]).unwrap();
        let spline = Spline::from_node_set(&nodes, SplineKind::Linear).unwrap();
        assert_eq!((0.0, 2.0), spline.range());
        assert_approx_eq!(spline.evaluate(0.5), 0.5, 1e-12);
    }

    #[test]
    fn batch_matches_scalar() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let nodes = NodeSet::equidistant(cos_pi, interval, 7).unwrap();
        let probes = vec![-0.5, 0.0, 0.1, 1.0 / 3.0, 0.9, 0.2, 1.5, 2.0, 2.5, 1.0];

        for kind in SplineKind::ALL {
            let spline = Spline::from_node_set(&nodes, kind).unwrap();
            assert_eq!(kind, spline.kind());
            let batch = evaluate_batch(nodes.x(), nodes.y(), &probes, kind).unwrap();
            assert_eq!(probes.len(), batch.len());
            for (x, value) in probes.iter().zip(batch.iter()) {
                assert_approx_eq!(*value, spline.evaluate(*x), 1e-12);
            }
        }
    }

    #[test]
    fn max_error_ordering() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let nodes = NodeSet::equidistant(cos_pi, interval, 9).unwrap();

        let linear = max_error(nodes.x(), nodes.y(), cos_pi, SplineKind::Linear).unwrap();
        let cubic = max_error(nodes.x(), nodes.y(), cos_pi, SplineKind::Cubic).unwrap();
        assert!(cubic < linear);
        assert!(linear < 0.1);

        let spline = Spline::from_node_set(&nodes, SplineKind::Cubic).unwrap();
        let series = spline.plot_series(cos_pi, DEFAULT_SAMPLES);
        assert_eq!(DEFAULT_SAMPLES, series.len());
        assert_approx_eq!(series.max_error(), cubic, 1e-12);
    }

    #[test]
    fn linear_spline_of_line_is_exact() {
        let error = max_error(&[0.0, 0.5, 3.0], &[1.0, 2.0, 7.0], |x| 2.0 * x + 1.0, SplineKind::Linear).unwrap();
        assert!(error < 1e-12);
    }

    #[test]
    fn built_from_config() {
        let config = SamplingConfig::default().with_spline_solver(SplineSolver::Dense);
        let spline = Spline::with_config(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0, 9.0],
            SplineKind::Quadratic,
            &config,
        )
        .unwrap();
        assert_approx_eq!(spline.evaluate(1.5), 2.2, 1e-12);
        assert_approx_eq!(spline.derivative(1.5), 3.0, 1e-12);
    }

    #[test]
    fn derivative_extrapolates_edge_segments() {
        let spline = Spline::new(vec![0.0, 1.0, 3.0], vec![0.0, 2.0, 3.0], SplineKind::Linear).unwrap();
        assert_approx_eq!(spline.derivative(-1.0), 2.0, 1e-12);
        assert_approx_eq!(spline.derivative(2.0), 0.5, 1e-12);
        assert_approx_eq!(spline.derivative(5.0), 0.5, 1e-12);
    }

    proptest! {
        #[test]
        fn exact_at_nodes(
            steps in proptest::collection::vec(0.05..2.0f64, 3..20),
            seed in -3.0..3.0f64,
        ) {
            let mut x_points = vec![seed];
            for step in &steps {
                let next = x_points[x_points.len() - 1] + step;
                x_points.push(next);
            }
            let y_points: Vec<f64> = x_points.iter().map(|x| (x * 1.3).sin() + seed).collect();

            for kind in SplineKind::ALL {
                let spline = Spline::new(x_points.clone(), y_points.clone(), kind).unwrap();
                for (x, y) in x_points.iter().zip(y_points.iter()) {
                    prop_assert!((spline.evaluate(*x) - y).abs() < 1e-9);
                }
            }
        }
    }
}
