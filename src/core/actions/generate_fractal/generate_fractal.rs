use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::screen::Screen;

/// Runs `algorithm` on every pixel of `screen`, row by row from row 0.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    screen: Screen,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    screen
        .pixels()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
