extern crate generic_approximation;

use generic_approximation::{cos_pi, Interval, NodeSet, SamplingConfig, Spline, SplineKind, SplineSolver};

fn main() {

    let interval = Interval::new(0.0, 2.0).unwrap();
    let config = SamplingConfig::default().with_spline_solver(SplineSolver::Dense);

    for number_of_nodes in 4..=10 {
        let nodes = NodeSet::equidistant(cos_pi, interval, number_of_nodes).unwrap();

        let errors: Vec<String> = SplineKind::ALL
            .iter()
            .map(|kind| {
                let spline = Spline::with_config(nodes.x().to_vec(), nodes.y().to_vec(), *kind, &config).unwrap();
                format!("{}={:.6}", kind, spline.max_error(cos_pi, config.error_samples()))
            })
            .collect();

        println!("{};{}", number_of_nodes, errors.join(";"));
    }
}
