/// Polynomial in powers of `(x - origin)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    origin: f64,
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(origin: f64, coefficients: Vec<f64>) -> Self {
        Polynomial { origin, coefficients }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.origin;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * dx + c)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let dx = x - self.origin;
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (power, c)| acc * dx + power as f64 * c)
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {
        let eps = 1e-6;
        let coefficients = vec![1.0, 2.5, -0.25];
        let polynomial = Polynomial::new(0.0, coefficients);

        assert_approx_eq!(polynomial.evaluate(2.1), 5.1475, eps);
        assert_approx_eq!(polynomial.evaluate(-3.14), -9.3149, eps);
        assert_approx_eq!(polynomial.evaluate(0.0), 1.0, eps);
        assert_eq!(2, polynomial.degree());
    }

    #[test]
    fn evaluate_shifted() {
        let eps = 1e-9;
        // 1 + 2.5 (x - 1) - 0.25 (x - 1)^2
        let polynomial = Polynomial::new(1.0, vec![1.0, 2.5, -0.25]);

        assert_approx_eq!(polynomial.evaluate(1.0), 1.0, eps);
        assert_approx_eq!(polynomial.evaluate(3.1), 5.1475, eps);
        assert_approx_eq!(polynomial.derivative(1.0), 2.5, eps);
        assert_approx_eq!(polynomial.derivative(3.0), 1.5, eps);
    }

    #[test]
    fn constant() {
        let polynomial = Polynomial::new(4.0, vec![7.0]);
        assert_eq!(7.0, polynomial.evaluate(-12.0));
        assert_eq!(0.0, polynomial.derivative(3.0));
        assert_eq!(0, polynomial.degree());
    }
}
