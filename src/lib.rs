mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render::CliRenderController;
pub use controllers::explorer::{Explorer, ExplorerError, Frame};
pub use controllers::ports::file_presenter::{FilePresenterPort, PrimitiveFilePresenterPort};
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::file::primitive_listing::PrimitiveListingPresenter;

pub use core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
pub use core::actions::render_frame::frame_config::FrameConfig;
pub use core::actions::render_frame::render_frame::{
    RenderError, render_geometry, render_plane, render_plane_buffer, render_plane_rayon,
    samples_to_pixel_buffer,
};

pub use core::data::colour::{Colour, Hsl};
pub use core::data::complex::Complex;
pub use core::data::fractal_result::{EscapeResult, FractalResult, NewtonResult};
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::pixel_sample::PixelSample;
pub use core::data::point::Point;
pub use core::data::primitive::{Primitive, PrimitiveKind, Vertex};
pub use core::data::screen::{Screen, ScreenError};
pub use core::data::view_rect::{DefaultView, ViewRect, ViewRectError};
pub use core::data::viewport::Viewport;
pub use core::data::zoom_box::ZoomBox;
pub use core::data::zoom_stack::ZoomStack;

pub use core::fractals::burning_ship::algorithm::{BurningShipAlgorithm, burning_ship_step};
pub use core::fractals::escape_time::colour_map::{EscapeTimeColourMap, HueBand};
pub use core::fractals::escape_time::errors::EscapeTimeError;
pub use core::fractals::escape_time::{escape_time, quadratic_step};
pub use core::fractals::fractal_kinds::{FractalKind, ParseFractalKindError};
pub use core::fractals::geometry::errors::GeometryError;
pub use core::fractals::geometry::levy::{LevyCurve, levy_apex};
pub use core::fractals::geometry::sierpinski_carpet::SierpinskiCarpet;
pub use core::fractals::geometry::sierpinski_triangle::SierpinskiTriangle;
pub use core::fractals::geometry::GeometryFractalKind;
pub use core::fractals::julia::algorithm::JuliaAlgorithm;
pub use core::fractals::julia::presets::JuliaPreset;
pub use core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use core::fractals::newton::algorithm::{NewtonAlgorithm, newton_step};
pub use core::fractals::newton::colour_map::NewtonColourMap;
pub use core::fractals::newton::errors::NewtonError;
pub use core::fractals::newton::roots::PolynomialRoots;
pub use core::fractals::plane_fractal::{
    PlaneColourMap, PlaneFractal, PlaneFractalError, PlaneFractalKind, PlaneRenderer,
};

pub use core::util::compute_zoom_rect::{ZoomError, compute_zoom_rect};
pub use core::util::hsl_to_rgb::hsl_to_rgb;
pub use core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};
