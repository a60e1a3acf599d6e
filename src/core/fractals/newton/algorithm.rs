use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::data::fractal_result::NewtonResult;
use crate::core::data::view_rect::DefaultView;
use crate::core::fractals::newton::colour_map::NewtonColourMap;
use crate::core::fractals::newton::errors::NewtonError;
use crate::core::fractals::newton::roots::PolynomialRoots;

pub const DEFAULT_MAX_ITERATIONS: u32 = 25;
pub const DEFAULT_DEGREE: u32 = 3;
pub const MIN_SELECTABLE_DEGREE: u32 = 2;
pub const MAX_SELECTABLE_DEGREE: u32 = 9;

pub const DEFAULT_VIEW: DefaultView = DefaultView {
    real_min: -2.0,
    real_max: 2.0,
    imag_min: -1.5,
};

/// One Newton-Raphson step on `zⁿ - 1`: `((n-1)·zⁿ + 1) / (n·zⁿ⁻¹)`.
///
/// `z` is returned unchanged when it sits at the origin, where the
/// derivative vanishes. Degree zero has no polynomial to solve.
pub fn newton_step(z: Complex, degree: u32) -> Result<Complex, NewtonError> {
    if degree == 0 {
        return Err(NewtonError::InvalidParameter { degree });
    }

    Ok(step(z, degree))
}

// `degree` is at least 1.
fn step(z: Complex, degree: u32) -> Complex {
    if z.modulus() <= 0.0 {
        return z;
    }

    let n = f64::from(degree);
    let numerator = Complex::from(n - 1.0) * z.pow(degree) + Complex::ONE;
    let denominator = Complex::from(n) * z.pow(degree - 1);

    numerator.checked_div(denominator).unwrap_or(z)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewtonAlgorithm {
    roots: PolynomialRoots,
    max_iterations: u32,
}

impl NewtonAlgorithm {
    pub fn new(degree: u32, max_iterations: u32) -> Result<Self, NewtonError> {
        if max_iterations == 0 {
            return Err(NewtonError::ZeroMaxIterationsError);
        }

        Ok(Self {
            roots: PolynomialRoots::compute(degree)?,
            max_iterations,
        })
    }

    #[must_use]
    pub fn degree(&self) -> u32 {
        self.roots.degree()
    }

    #[must_use]
    pub fn roots(&self) -> &PolynomialRoots {
        &self.roots
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterates from `point` until a root is within reach or the budget runs
    /// out. A point already on a root reports zero iterations.
    #[must_use]
    pub fn classify(&self, point: Complex) -> NewtonResult {
        let degree = self.degree();

        let outcome = (0..self.max_iterations).try_fold(point, |z, iteration| {
            match self.roots.matching_root(z) {
                Some(root_index) => ControlFlow::Break(NewtonResult {
                    iterations: iteration,
                    root_index: Some(root_index),
                }),
                None => ControlFlow::Continue(step(z, degree)),
            }
        });

        match outcome {
            ControlFlow::Break(result) => result,
            ControlFlow::Continue(z) => NewtonResult {
                iterations: self.max_iterations,
                root_index: self.roots.matching_root(z),
            },
        }
    }

    #[must_use]
    pub fn colour_map(&self) -> NewtonColourMap {
        NewtonColourMap::new(self.degree(), self.max_iterations)
    }
}
