use std::f64::consts::PI;

/// Reference target `cos(pi x)`.
pub fn cos_pi(x: f64) -> f64 {
    (PI * x).cos()
}
