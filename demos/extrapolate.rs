extern crate generic_approximation;

use generic_approximation::{bernstein, spline, cos_pi, linspace};

fn main() {

    let x_points = vec![0.0, 0.5, 1.0, 1.5, 2.0];
    let y_points: Vec<f64> = x_points.iter().map(|x| cos_pi(*x)).collect();

    let x_vector = linspace(-1.0, 3.0, 41);
    let cubic = spline::evaluate_batch(&x_points, &y_points, &x_vector, spline::SplineKind::Cubic).unwrap();

    println!("x;cubic;bernstein");
    for i in 0..x_vector.len() {
        let x = x_vector[i];
        let approximation = bernstein::approximate(cos_pi, x, 10, 0.0, 2.0).unwrap();
        println!("{:.2};{:.4};{:.4}", x, cubic[i], approximation);
    }
}
