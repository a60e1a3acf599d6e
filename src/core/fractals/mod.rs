pub mod burning_ship;
pub mod escape_time;
pub mod fractal_kinds;
pub mod geometry;
pub mod julia;
pub mod mandelbrot;
pub mod newton;
pub mod plane_fractal;
