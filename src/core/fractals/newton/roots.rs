use std::f64::consts::TAU;

use crate::core::data::complex::Complex;
use crate::core::fractals::newton::errors::NewtonError;

/// Distance under which an iterate counts as having reached a root.
pub const ROOT_PRECISION: f64 = 1e-4;

/// The n-th roots of unity, the solutions of `zⁿ - 1 = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRoots {
    roots: Vec<Complex>,
}

impl PolynomialRoots {
    /// `root[k] = (cos(2πk/n), sin(2πk/n))` for `k` in `0..n`.
    pub fn compute(degree: u32) -> Result<Self, NewtonError> {
        if degree == 0 {
            return Err(NewtonError::InvalidParameter { degree });
        }

        let n = f64::from(degree);
        let roots = (0..degree)
            .map(|k| {
                let angle = TAU * f64::from(k) / n;
                Complex::new(angle.cos(), angle.sin())
            })
            .collect();

        Ok(Self { roots })
    }

    #[must_use]
    pub fn degree(&self) -> u32 {
        self.roots.len() as u32
    }

    #[must_use]
    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    /// Index of the first root within [`ROOT_PRECISION`] of `z`.
    #[must_use]
    pub fn matching_root(&self, z: Complex) -> Option<usize> {
        self.roots
            .iter()
            .position(|&root| (z - root).modulus() <= ROOT_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_zero_degree_is_invalid() {
        assert_eq!(
            PolynomialRoots::compute(0),
            Err(NewtonError::InvalidParameter { degree: 0 })
        );
    }

    #[test]
    fn test_roots_lie_on_unit_circle() {
        for degree in 1..=9 {
            let roots = PolynomialRoots::compute(degree).unwrap();

            assert_eq!(roots.degree(), degree);
            assert_eq!(roots.roots()[0], Complex::ONE);
            assert!(
                roots
                    .roots()
                    .iter()
                    .all(|root| (root.modulus() - 1.0).abs() < EPSILON)
            );
        }
    }

    #[test]
    fn test_roots_solve_polynomial() {
        let roots = PolynomialRoots::compute(5).unwrap();

        for root in roots.roots() {
            let residual = root.pow(5) - Complex::ONE;
            assert!(residual.modulus() < 1e-9);
        }
    }

    #[test]
    fn test_cube_roots() {
        let roots = PolynomialRoots::compute(3).unwrap();
        let half_root_three = 3.0_f64.sqrt() / 2.0;

        assert!((roots.roots()[1] - Complex::new(-0.5, half_root_three)).modulus() < EPSILON);
        assert!((roots.roots()[2] - Complex::new(-0.5, -half_root_three)).modulus() < EPSILON);
    }

    #[test]
    fn test_matching_root_within_precision() {
        let roots = PolynomialRoots::compute(4).unwrap();

        assert_eq!(roots.matching_root(Complex::new(0.0, 1.00005)), Some(1));
        assert_eq!(roots.matching_root(Complex::new(-1.0, 0.0)), Some(2));
        assert_eq!(roots.matching_root(Complex::new(0.5, 0.5)), None);
        assert_eq!(roots.matching_root(Complex::new(1.001, 0.0)), None);
    }
}
