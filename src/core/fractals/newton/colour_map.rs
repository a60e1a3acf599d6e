use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::{Colour, Hsl};
use crate::core::data::fractal_result::NewtonResult;
use crate::core::util::hsl_to_rgb::hsl_to_rgb;

/// Each root owns an evenly spaced hue; fast convergence is brighter.
/// Points that reach no root are painted black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewtonColourMap {
    degree: u32,
    max_iterations: u32,
}

impl NewtonColourMap {
    #[must_use]
    pub fn new(degree: u32, max_iterations: u32) -> Self {
        Self {
            degree,
            max_iterations,
        }
    }

    #[must_use]
    pub fn hsl(&self, root_index: usize, iterations: u32) -> Hsl {
        let hue = root_index as f64 / f64::from(self.degree);
        let lightness = 0.5 * (1.0 - f64::from(iterations) / f64::from(self.max_iterations));

        Hsl::new(hue, 1.0, lightness)
    }
}

impl ColourMap<NewtonResult> for NewtonColourMap {
    fn map(&self, value: NewtonResult) -> Result<Colour, ColourMapError> {
        if value.iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: value.iterations,
                max_iterations: self.max_iterations,
            });
        }

        let Some(root_index) = value.root_index else {
            return Ok(Colour::BLACK);
        };

        if root_index >= self.degree as usize {
            return Err(ColourMapError::RootOutOfRange {
                root_index,
                degree: self.degree,
            });
        }

        Ok(hsl_to_rgb(self.hsl(root_index, value.iterations)))
    }

    fn display_name(&self) -> &str {
        "Newton"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_convergence_on_first_root_is_pure_red() {
        let map = NewtonColourMap::new(3, 25);
        let result = NewtonResult {
            iterations: 0,
            root_index: Some(0),
        };

        assert_eq!(map.map(result), Ok(Colour::RED));
    }

    #[test]
    fn test_roots_get_evenly_spaced_hues() {
        let map = NewtonColourMap::new(4, 25);

        let hues: Vec<f64> = (0..4).map(|index| map.hsl(index, 0).hue).collect();

        assert_eq!(hues, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_slower_convergence_is_darker() {
        let map = NewtonColourMap::new(3, 20);

        assert!(map.hsl(1, 2).lightness > map.hsl(1, 10).lightness);
        assert_eq!(map.hsl(1, 20).lightness, 0.0);
    }

    #[test]
    fn test_non_convergent_point_is_black() {
        let map = NewtonColourMap::new(3, 25);
        let result = NewtonResult {
            iterations: 25,
            root_index: None,
        };

        assert_eq!(map.map(result), Ok(Colour::BLACK));
    }

    #[test]
    fn test_invalid_results_are_errors() {
        let map = NewtonColourMap::new(3, 25);

        assert_eq!(
            map.map(NewtonResult {
                iterations: 26,
                root_index: Some(0)
            }),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 26,
                max_iterations: 25
            })
        );
        assert_eq!(
            map.map(NewtonResult {
                iterations: 3,
                root_index: Some(3)
            }),
            Err(ColourMapError::RootOutOfRange {
                root_index: 3,
                degree: 3
            })
        );
    }
}
