extern crate generic_approximation;

use generic_approximation::{lagrange::Lagrange, Interval, NodeSet, SamplingConfig};

fn main() {

    let target = |x: f64| x.sin();
    let interval = Interval::new(0.0, 6.0).unwrap();
    let config = SamplingConfig::default().with_plot_samples(60);

    let nodes = NodeSet::equidistant(target, interval, 7).unwrap();
    let interpolant = Lagrange::from_nodes(&nodes).unwrap();

    let series = interpolant.plot_series(target, config.plot_samples());

    println!("x;y;dy;sin");
    for i in 0..series.len() {
        let x = series.x[i];
        println!("{:.2};{:.4};{:.4};{:.4}", x, series.fitted[i], interpolant.derivative(x), series.target[i]);
    }
}
