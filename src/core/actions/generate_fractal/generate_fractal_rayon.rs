use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::screen::Screen;

/// Parallel [`generate_fractal`](super::generate_fractal::generate_fractal)
/// on rayon's work-stealing pool. Results keep the sequential order.
pub fn generate_fractal_rayon<Alg>(
    screen: Screen,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let pixels: Vec<Point> = screen.pixels().collect();

    pixels
        .into_par_iter()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
