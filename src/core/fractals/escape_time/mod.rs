pub mod colour_map;
pub mod errors;

use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::data::fractal_result::EscapeResult;

/// `|z| >= 2`, compared squared to skip the square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z = step(z, c)` from `z0` until `|z| >= 2` or `max_iterations`
/// updates have been applied.
///
/// The returned count is the number of updates performed before the escape
/// test first succeeded. A point that never escapes reports `max_iterations`.
pub fn escape_time<F>(z0: Complex, c: Complex, max_iterations: u32, step: F) -> EscapeResult
where
    F: Fn(Complex, Complex) -> Complex,
{
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(step(z, c))
        }
    });

    match outcome {
        ControlFlow::Break(iterations) => EscapeResult {
            iterations,
            escaped: true,
        },
        ControlFlow::Continue(_) => EscapeResult {
            iterations: max_iterations,
            escaped: false,
        },
    }
}

/// `z² + c`, shared by Mandelbrot and Julia.
#[must_use]
pub fn quadratic_step(z: Complex, c: Complex) -> Complex {
    z * z + c
}
