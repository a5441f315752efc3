extern crate generic_approximation;

use generic_approximation::{bernstein::Bernstein, convergence, cos_pi, Interval, SamplingConfig};

fn main() {

    let config = SamplingConfig::default();
    let interval = Interval::new(0.0, 1.0).unwrap();

    let sweep = convergence(1..=40, |degree| {
        Ok(Bernstein::new(cos_pi, degree, interval).max_error(cos_pi, config.error_samples()))
    }).unwrap();

    println!("n;error");
    for point in sweep {
        println!("{};{:.6}", point.step, point.error);
    }
}
