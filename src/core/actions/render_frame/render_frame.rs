use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::actions::render_frame::frame_config::FrameConfig;
use crate::core::data::fractal_result::FractalResult;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::pixel_sample::PixelSample;
use crate::core::data::primitive::Primitive;
use crate::core::data::screen::Screen;
use crate::core::fractals::geometry::GeometryFractalKind;
use crate::core::fractals::geometry::errors::GeometryError;
use crate::core::fractals::plane_fractal::{PlaneColourMap, PlaneFractalError};
use crate::core::util::pixel_to_plane::PixelToPlaneError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Fractal(PlaneFractalError),
    Pixel(PixelToPlaneError),
    ColourMap(ColourMapError),
    PixelBuffer(GeneratePixelBufferError),
    Geometry(GeometryError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fractal(err) => write!(f, "invalid fractal settings: {}", err),
            Self::Pixel(err) => write!(f, "{}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
            Self::Geometry(err) => write!(f, "invalid figure settings: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(err) => Some(err),
            Self::Pixel(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Geometry(err) => Some(err),
        }
    }
}

impl From<PlaneFractalError> for RenderError {
    fn from(err: PlaneFractalError) -> Self {
        Self::Fractal(err)
    }
}

impl From<PixelToPlaneError> for RenderError {
    fn from(err: PixelToPlaneError) -> Self {
        Self::Pixel(err)
    }
}

impl From<ColourMapError> for RenderError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<GeometryError> for RenderError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

fn classify_frame(
    config: &FrameConfig,
    parallel: bool,
) -> Result<(Vec<FractalResult>, PlaneColourMap), RenderError> {
    let renderer = config.renderer()?;
    let results = if parallel {
        generate_fractal_rayon(config.screen, &renderer)?
    } else {
        generate_fractal(config.screen, &renderer)?
    };

    Ok((results, renderer.fractal().colour_map()))
}

fn colour_samples(
    screen: Screen,
    results: Vec<FractalResult>,
    colour_map: &PlaneColourMap,
) -> Result<Vec<PixelSample>, RenderError> {
    screen
        .pixels()
        .zip(results)
        .map(|(pixel, result)| {
            Ok(PixelSample {
                x: pixel.x,
                y: pixel.y,
                colour: colour_map.map(result)?,
            })
        })
        .collect()
}

/// One coloured sample per pixel. Rows count up from the bottom of the view.
pub fn render_plane(config: &FrameConfig) -> Result<Vec<PixelSample>, RenderError> {
    let (results, colour_map) = classify_frame(config, false)?;

    colour_samples(config.screen, results, &colour_map)
}

/// [`render_plane`] with pixels classified on the rayon pool.
pub fn render_plane_rayon(config: &FrameConfig) -> Result<Vec<PixelSample>, RenderError> {
    let (results, colour_map) = classify_frame(config, true)?;

    colour_samples(config.screen, results, &colour_map)
}

/// The frame as an RGB image, top row first.
pub fn render_plane_buffer(config: &FrameConfig, parallel: bool) -> Result<PixelBuffer, RenderError> {
    let (results, colour_map) = classify_frame(config, parallel)?;

    Ok(generate_pixel_buffer(results, &colour_map, config.screen)?)
}

/// Paints samples into an image. Sample rows count from the bottom, image
/// rows from the top.
pub fn samples_to_pixel_buffer(
    samples: &[PixelSample],
    screen: Screen,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer = PixelBuffer::new(screen);

    for sample in samples {
        let pixel = Point {
            x: sample.x,
            y: screen.flip_y(sample.y) - 1,
        };
        buffer.set_pixel(pixel, sample.colour)?;
    }

    Ok(buffer)
}

pub fn render_geometry(
    kind: GeometryFractalKind,
    depth: u32,
    screen: Screen,
) -> Result<Vec<Primitive>, RenderError> {
    Ok(kind.generate(depth, screen)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::view_rect::ViewRect;
    use crate::core::fractals::julia::presets::JuliaPreset;
    use crate::core::fractals::plane_fractal::PlaneFractalKind;

    fn config(fractal: PlaneFractalKind) -> FrameConfig {
        FrameConfig::for_kind(fractal, Screen::new(40, 30).unwrap()).unwrap()
    }

    #[test]
    fn test_render_plane_emits_one_sample_per_pixel() {
        let config = config(PlaneFractalKind::Mandelbrot);

        let samples = render_plane(&config).unwrap();

        assert_eq!(samples.len(), 40 * 30);
        assert_eq!((samples[0].x, samples[0].y), (0, 0));
        assert_eq!((samples[41].x, samples[41].y), (1, 1));
    }

    #[test]
    fn test_mandelbrot_origin_is_black() {
        let screen = Screen::new(4, 4).unwrap();
        let config = FrameConfig {
            fractal: PlaneFractalKind::Mandelbrot,
            view: ViewRect::new(-2.0, 2.0, -2.0, 2.0).unwrap(),
            screen,
            max_iterations: 50,
        };

        let samples = render_plane(&config).unwrap();
        let origin = samples
            .iter()
            .find(|sample| sample.x == 2 && sample.y == 2)
            .unwrap();

        assert_eq!(origin.colour, Colour::BLACK);
        // (-2, -2) escapes straight away.
        assert_ne!(samples[0].colour, Colour::BLACK);
    }

    #[test]
    fn test_parallel_render_matches_sequential() {
        for fractal in [
            PlaneFractalKind::Mandelbrot,
            PlaneFractalKind::Julia {
                preset: JuliaPreset::new(2),
            },
            PlaneFractalKind::BurningShip,
            PlaneFractalKind::Newton { degree: 5 },
        ] {
            let config = config(fractal);

            assert_eq!(render_plane(&config), render_plane_rayon(&config));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = config(PlaneFractalKind::Newton { degree: 3 });

        assert_eq!(render_plane(&config), render_plane(&config));
    }

    #[test]
    fn test_buffer_matches_samples_flipped() {
        let config = config(PlaneFractalKind::Julia {
            preset: JuliaPreset::default(),
        });

        let samples = render_plane(&config).unwrap();
        let buffer = render_plane_buffer(&config, false).unwrap();

        for sample in samples.iter().step_by(37) {
            let image_pixel = Point {
                x: sample.x,
                y: config.screen.flip_y(sample.y) - 1,
            };
            assert_eq!(buffer.pixel(image_pixel), Some(sample.colour));
        }
    }

    #[test]
    fn test_samples_to_pixel_buffer_matches_direct_buffer() {
        let config = config(PlaneFractalKind::BurningShip);

        let samples = render_plane(&config).unwrap();
        let from_samples = samples_to_pixel_buffer(&samples, config.screen).unwrap();
        let direct = render_plane_buffer(&config, true).unwrap();

        assert_eq!(from_samples.buffer(), direct.buffer());
    }

    #[test]
    fn test_samples_outside_screen_are_rejected() {
        let screen = Screen::new(2, 2).unwrap();
        let samples = [PixelSample {
            x: 2,
            y: 0,
            colour: Colour::WHITE,
        }];

        assert!(samples_to_pixel_buffer(&samples, screen).is_err());
    }

    #[test]
    fn test_invalid_settings_are_reported() {
        let mut config = config(PlaneFractalKind::Newton { degree: 0 });
        assert!(matches!(render_plane(&config), Err(RenderError::Fractal(_))));

        config.fractal = PlaneFractalKind::Mandelbrot;
        config.max_iterations = 0;
        assert!(matches!(
            render_plane_buffer(&config, true),
            Err(RenderError::Fractal(_))
        ));
    }

    #[test]
    fn test_render_geometry() {
        let screen = Screen::new(800, 600).unwrap();

        assert_eq!(
            render_geometry(GeometryFractalKind::Levy, 4, screen)
                .unwrap()
                .len(),
            16
        );
        assert_eq!(
            render_geometry(GeometryFractalKind::SierpinskiCarpet, 0, screen),
            Err(RenderError::Geometry(GeometryError::ZeroDepth))
        );
    }
}
