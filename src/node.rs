use crate::error::{check_distinct, check_shape, ApproximationError, Result};
use crate::interval::Interval;

/// Node represents point through which interpolant passes.
/// - `x` - coordinate,
/// - `y` - coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    x: f64,
    y: f64,
}

impl Node {
    pub fn new(x: f64, y: f64) -> Self {
        Node { x, y }
    }

    /// Creates [Node] lying on `f` at `x`.
    pub fn on<F: Fn(f64) -> f64>(f: F, x: f64) -> Self {
        Node { x, y: f(x) }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Eq for Node {}

/// Ordered set of nodes with distinct x coordinates. Insertion order is kept.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl NodeSet {
    /// # Errors
    /// Error is returned when lengths differ or an x coordinate repeats.
    /// ```
    /// use generic_approximation::NodeSet;
    ///
    /// assert!(NodeSet::new(vec![0.0, 1.0], vec![1.0, 2.0]).is_ok());
    /// assert!(NodeSet::new(vec![0.0, 1.0], vec![1.0]).is_err());
    /// assert!(NodeSet::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        check_shape(&x, &y)?;
        check_distinct(&x)?;
        Ok(NodeSet { x, y })
    }

    /// Builds set from nodes in the given order.
    pub fn from_nodes(nodes: &[Node]) -> Result<Self> {
        let x = nodes.iter().map(|n| n.x).collect();
        let y = nodes.iter().map(|n| n.y).collect();
        NodeSet::new(x, y)
    }

    /// `count` equidistant nodes on `interval`, both ends included, lying on `f`.
    /// ```
    /// use generic_approximation::{Interval, NodeSet};
    ///
    /// let nodes = NodeSet::equidistant(|x| x * x, Interval::new(0.0, 2.0).unwrap(), 3).unwrap();
    /// assert_eq!(&[0.0, 1.0, 2.0], nodes.x());
    /// assert_eq!(&[0.0, 1.0, 4.0], nodes.y());
    /// ```
    pub fn equidistant<F: Fn(f64) -> f64>(f: F, interval: Interval, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(ApproximationError::insufficient_nodes(1, 0));
        }
        let x = interval.samples(count);
        let y = x.iter().map(|x| f(*x)).collect();
        Ok(NodeSet { x, y })
    }

    /// Appends a node. The set is left unchanged when `x` already exists.
    pub fn push(&mut self, node: Node) -> Result<()> {
        if self.x.contains(&node.x) {
            return Err(ApproximationError::NumericalDegeneracy {
                index: self.x.len(),
                x: node.x,
            });
        }
        self.x.push(node.x);
        self.y.push(node.y);
        Ok(())
    }

    /// Removes and returns the node at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index >= self.x.len() {
            return None;
        }
        Some(Node::new(self.x.remove(index), self.y.remove(index)))
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(x, y)| Node::new(*x, *y))
    }

    /// Smallest and largest x coordinate.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        x_range(&self.x)
    }

    /// Copy of the set ordered by ascending x.
    pub fn sorted(&self) -> NodeSet {
        let mut nodes: Vec<Node> = self.nodes().collect();
        nodes.sort();
        NodeSet {
            x: nodes.iter().map(|n| n.x).collect(),
            y: nodes.iter().map(|n| n.y).collect(),
        }
    }
}

pub(crate) fn x_range(x_points: &[f64]) -> Option<(f64, f64)> {
    let first = *x_points.first()?;
    Some(
        x_points
            .iter()
            .fold((first, first), |(min, max), x| (min.min(*x), max.max(*x))),
    )
}
