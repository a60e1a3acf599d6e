use std::error::Error;
use std::fmt;

use crate::core::actions::render_frame::frame_config::FrameConfig;
use crate::core::actions::render_frame::render_frame::{
    RenderError, render_geometry, render_plane, render_plane_rayon,
};
use crate::core::data::pixel_sample::PixelSample;
use crate::core::data::point::Point;
use crate::core::data::primitive::Primitive;
use crate::core::data::screen::Screen;
use crate::core::data::view_rect::ViewRectError;
use crate::core::data::viewport::Viewport;
use crate::core::data::zoom_box::ZoomBox;
use crate::core::data::zoom_stack::ZoomStack;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::geometry::MIN_DEPTH;
use crate::core::fractals::geometry::errors::{GeometryError, validate_depth};
use crate::core::fractals::julia::presets::JuliaPreset;
use crate::core::fractals::newton::algorithm::{
    DEFAULT_DEGREE, MAX_SELECTABLE_DEGREE, MIN_SELECTABLE_DEGREE,
};
use crate::core::fractals::plane_fractal::PlaneFractalKind;
use crate::core::util::compute_zoom_rect::ZoomError;

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerError {
    View(ViewRectError),
    Zoom(ZoomError),
    Render(RenderError),
    Depth(GeometryError),
    DegreeOutOfRange { degree: u32 },
    ZeroMaxIterations,
    NotZoomable { kind: FractalKind },
    OutsideScreen { pixel: Point },
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "{}", err),
            Self::Zoom(err) => write!(f, "{}", err),
            Self::Render(err) => write!(f, "{}", err),
            Self::Depth(err) => write!(f, "{}", err),
            Self::DegreeOutOfRange { degree } => write!(
                f,
                "Newton degree {} outside {}..={}",
                degree, MIN_SELECTABLE_DEGREE, MAX_SELECTABLE_DEGREE
            ),
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NotZoomable { kind } => write!(f, "{} cannot be zoomed", kind),
            Self::OutsideScreen { pixel } => {
                write!(f, "window pixel x:{}, y:{} is off screen", pixel.x, pixel.y)
            }
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Depth(err) => Some(err),
            Self::DegreeOutOfRange { .. }
            | Self::ZeroMaxIterations
            | Self::NotZoomable { .. }
            | Self::OutsideScreen { .. } => None,
        }
    }
}

impl From<ViewRectError> for ExplorerError {
    fn from(err: ViewRectError) -> Self {
        Self::View(err)
    }
}

impl From<ZoomError> for ExplorerError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

impl From<RenderError> for ExplorerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<GeometryError> for ExplorerError {
    fn from(err: GeometryError) -> Self {
        Self::Depth(err)
    }
}

/// Output of one render: coloured pixels or screen-space shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Pixels(Vec<PixelSample>),
    Primitives(Vec<Primitive>),
}

/// Interactive state for browsing the fractal catalogue.
///
/// Plane fractals carry a view with zoom history; geometric figures carry a
/// recursion depth. Switching fractal restores that fractal's defaults.
#[derive(Debug, Clone)]
pub struct Explorer {
    kind: FractalKind,
    viewport: Viewport,
    history: ZoomStack,
    zoom_box: ZoomBox,
    julia_preset: JuliaPreset,
    newton_degree: u32,
    depth: u32,
    max_iterations: u32,
    parallel: bool,
}

impl Explorer {
    pub fn new(kind: FractalKind, screen: Screen) -> Result<Self, ExplorerError> {
        let plane = plane_kind(kind, JuliaPreset::default(), DEFAULT_DEGREE);
        let view = plane.default_view().to_view(screen)?;

        let mut explorer = Self {
            kind,
            viewport: Viewport::new(view, screen),
            history: ZoomStack::new(),
            zoom_box: ZoomBox::default(),
            julia_preset: JuliaPreset::default(),
            newton_degree: DEFAULT_DEGREE,
            depth: MIN_DEPTH,
            max_iterations: plane.default_max_iterations(),
            parallel: false,
        };
        explorer.select(kind)?;

        Ok(explorer)
    }

    /// Switches fractal, restoring its opening view, iteration limit and
    /// depth. The zoom history is discarded.
    pub fn select(&mut self, kind: FractalKind) -> Result<(), ExplorerError> {
        if kind == FractalKind::Newton {
            self.newton_degree = DEFAULT_DEGREE;
        }

        if let Some(geometry) = kind.as_geometry() {
            self.depth = geometry.default_depth();
        } else {
            let plane = plane_kind(kind, self.julia_preset, self.newton_degree);
            let view = plane.default_view().to_view(self.viewport.screen())?;

            self.viewport.reset(view, &mut self.history);
            self.max_iterations = plane.default_max_iterations();
        }

        self.kind = kind;
        Ok(())
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn history(&self) -> &ZoomStack {
        &self.history
    }

    #[must_use]
    pub fn zoom_box(&self) -> ZoomBox {
        self.zoom_box
    }

    pub fn zoom_box_mut(&mut self) -> &mut ZoomBox {
        &mut self.zoom_box
    }

    #[must_use]
    pub fn julia_preset(&self) -> JuliaPreset {
        self.julia_preset
    }

    #[must_use]
    pub fn newton_degree(&self) -> u32 {
        self.newton_degree
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Selected plane fractal with its current parameters.
    #[must_use]
    pub fn plane_fractal(&self) -> Option<PlaneFractalKind> {
        PlaneFractalKind::from_kind(self.kind)
            .map(|_| plane_kind(self.kind, self.julia_preset, self.newton_degree))
    }

    /// Moves to the next Julia constant, keeping the current view.
    pub fn next_julia_preset(&mut self) {
        self.julia_preset = self.julia_preset.next();
    }

    pub fn set_julia_preset(&mut self, preset: JuliaPreset) {
        self.julia_preset = preset;
    }

    pub fn set_newton_degree(&mut self, degree: u32) -> Result<(), ExplorerError> {
        if !(MIN_SELECTABLE_DEGREE..=MAX_SELECTABLE_DEGREE).contains(&degree) {
            return Err(ExplorerError::DegreeOutOfRange { degree });
        }

        self.newton_degree = degree;
        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ExplorerError> {
        if max_iterations == 0 {
            return Err(ExplorerError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    fn max_depth(&self) -> u32 {
        self.kind
            .as_geometry()
            .map_or(MIN_DEPTH, |geometry| geometry.max_depth())
    }

    pub fn set_depth(&mut self, depth: u32) -> Result<(), ExplorerError> {
        validate_depth(depth, self.max_depth())?;

        self.depth = depth;
        Ok(())
    }

    /// Returns `false` when already at the deepest level.
    pub fn increase_depth(&mut self) -> bool {
        if self.depth >= self.max_depth() {
            return false;
        }

        self.depth += 1;
        true
    }

    /// Returns `false` when already at depth one.
    pub fn decrease_depth(&mut self) -> bool {
        if self.depth <= MIN_DEPTH {
            return false;
        }

        self.depth -= 1;
        true
    }

    /// Zooms onto the zoom box centred on `window_pixel`, given in window
    /// coordinates with the origin at the top.
    pub fn zoom_in_at(&mut self, window_pixel: Point) -> Result<(), ExplorerError> {
        if !self.kind.is_plane() {
            return Err(ExplorerError::NotZoomable { kind: self.kind });
        }

        let screen = self.viewport.screen();
        if !screen.contains_point(window_pixel) {
            return Err(ExplorerError::OutsideScreen {
                pixel: window_pixel,
            });
        }

        let centre = Point {
            x: window_pixel.x,
            y: screen.flip_y(window_pixel.y),
        };
        self.viewport
            .zoom_in(centre, self.zoom_box.fraction(), &mut self.history)?;

        Ok(())
    }

    /// Returns `false` when there is no earlier view to go back to.
    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out(&mut self.history)
    }

    /// Outline of the zoom box around `window_pixel`, in plane row order.
    #[must_use]
    pub fn zoom_box_outline(&self, window_pixel: Point) -> Vec<Primitive> {
        let screen = self.viewport.screen();
        let centre = Point {
            x: window_pixel.x,
            y: screen.flip_y(window_pixel.y),
        };

        self.zoom_box.outline(centre, screen)
    }

    #[must_use]
    pub fn frame_config(&self) -> Option<FrameConfig> {
        self.plane_fractal().map(|fractal| FrameConfig {
            fractal,
            view: self.viewport.view(),
            screen: self.viewport.screen(),
            max_iterations: self.max_iterations,
        })
    }

    pub fn render(&self) -> Result<Frame, ExplorerError> {
        if let Some(geometry) = self.kind.as_geometry() {
            let primitives = render_geometry(geometry, self.depth, self.viewport.screen())?;
            return Ok(Frame::Primitives(primitives));
        }

        let Some(config) = self.frame_config() else {
            return Err(ExplorerError::NotZoomable { kind: self.kind });
        };
        let samples = if self.parallel {
            render_plane_rayon(&config)?
        } else {
            render_plane(&config)?
        };

        Ok(Frame::Pixels(samples))
    }
}

/// `kind`'s plane variant carrying the given parameters; geometric kinds
/// fall back to the Mandelbrot defaults.
fn plane_kind(kind: FractalKind, preset: JuliaPreset, degree: u32) -> PlaneFractalKind {
    match PlaneFractalKind::from_kind(kind) {
        Some(PlaneFractalKind::Julia { .. }) => PlaneFractalKind::Julia { preset },
        Some(PlaneFractalKind::Newton { .. }) => PlaneFractalKind::Newton { degree },
        Some(other) => other,
        None => PlaneFractalKind::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::primitive::PrimitiveKind;

    fn screen() -> Screen {
        Screen::new(80, 60).unwrap()
    }

    #[test]
    fn test_new_uses_fractal_defaults() {
        let explorer = Explorer::new(FractalKind::BurningShip, screen()).unwrap();

        assert_eq!(explorer.max_iterations(), 40);
        assert_eq!(explorer.viewport().view().real_max(), 1.2);
        assert!(explorer.history().is_empty());
    }

    #[test]
    fn test_zoom_in_then_out_restores_view() {
        let mut explorer = Explorer::new(FractalKind::Mandelbrot, screen()).unwrap();
        let original = explorer.viewport().view();

        explorer.zoom_in_at(Point { x: 40, y: 30 }).unwrap();
        explorer.zoom_in_at(Point { x: 10, y: 50 }).unwrap();

        assert_eq!(explorer.history().len(), 2);
        assert!(explorer.zoom_out());
        assert!(explorer.zoom_out());
        assert!(!explorer.zoom_out());
        assert_eq!(explorer.viewport().view(), original);
    }

    #[test]
    fn test_zoom_uses_top_origin_window_coordinates() {
        let mut explorer = Explorer::new(FractalKind::Mandelbrot, screen()).unwrap();
        let original = explorer.viewport().view();

        // Near the top of the window is near imag_max.
        explorer.zoom_in_at(Point { x: 40, y: 5 }).unwrap();

        assert!(explorer.viewport().view().centre().imag > original.centre().imag);
    }

    #[test]
    fn test_zoom_rejects_off_screen_window_pixel() {
        let mut explorer = Explorer::new(FractalKind::Mandelbrot, screen()).unwrap();
        let original = explorer.viewport().view();

        for pixel in [Point { x: 10, y: i32::MIN }, Point { x: 80, y: 30 }] {
            assert_eq!(
                explorer.zoom_in_at(pixel),
                Err(ExplorerError::OutsideScreen { pixel })
            );
        }
        assert_eq!(explorer.viewport().view(), original);
        assert!(explorer.history().is_empty());
    }

    #[test]
    fn test_zoom_box_outline_far_off_screen_does_not_overflow() {
        let explorer = Explorer::new(FractalKind::Mandelbrot, screen()).unwrap();

        let lines = explorer.zoom_box_outline(Point { x: 10, y: i32::MIN });

        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_select_resets_view_and_history() {
        let mut explorer = Explorer::new(FractalKind::Julia, screen()).unwrap();
        explorer.zoom_in_at(Point { x: 40, y: 30 }).unwrap();
        explorer.next_julia_preset();

        explorer.select(FractalKind::Julia).unwrap();

        assert!(explorer.history().is_empty());
        assert_eq!(explorer.viewport().view().imag_min(), -1.35);
        assert_eq!(explorer.julia_preset(), JuliaPreset::new(1));
    }

    #[test]
    fn test_julia_preset_change_keeps_view() {
        let mut explorer = Explorer::new(FractalKind::Julia, screen()).unwrap();
        explorer.zoom_in_at(Point { x: 20, y: 20 }).unwrap();
        let zoomed = explorer.viewport().view();

        explorer.next_julia_preset();

        assert_eq!(explorer.viewport().view(), zoomed);
        assert_eq!(
            explorer.plane_fractal(),
            Some(PlaneFractalKind::Julia {
                preset: JuliaPreset::new(1)
            })
        );
    }

    #[test]
    fn test_newton_degree_range() {
        let mut explorer = Explorer::new(FractalKind::Newton, screen()).unwrap();

        assert_eq!(explorer.newton_degree(), 3);
        assert_eq!(
            explorer.set_newton_degree(1),
            Err(ExplorerError::DegreeOutOfRange { degree: 1 })
        );
        assert!(explorer.set_newton_degree(10).is_err());
        explorer.set_newton_degree(7).unwrap();
        assert_eq!(
            explorer.plane_fractal(),
            Some(PlaneFractalKind::Newton { degree: 7 })
        );

        explorer.select(FractalKind::Newton).unwrap();
        assert_eq!(explorer.newton_degree(), DEFAULT_DEGREE);
    }

    #[test]
    fn test_depth_clamped_per_figure() {
        let mut explorer = Explorer::new(FractalKind::SierpinskiTriangle, screen()).unwrap();

        assert!(!explorer.decrease_depth());
        for _ in 0..10 {
            explorer.increase_depth();
        }
        assert_eq!(explorer.depth(), 6);

        explorer.select(FractalKind::Levy).unwrap();
        assert_eq!(explorer.depth(), 1);
        explorer.set_depth(16).unwrap();
        assert!(!explorer.increase_depth());
        assert!(explorer.set_depth(17).is_err());
    }

    #[test]
    fn test_geometry_cannot_zoom() {
        let mut explorer = Explorer::new(FractalKind::SierpinskiCarpet, screen()).unwrap();

        assert_eq!(
            explorer.zoom_in_at(Point { x: 1, y: 1 }),
            Err(ExplorerError::NotZoomable {
                kind: FractalKind::SierpinskiCarpet
            })
        );
    }

    #[test]
    fn test_render_plane_frame() {
        let explorer = Explorer::new(FractalKind::Newton, screen()).unwrap();

        let Frame::Pixels(samples) = explorer.render().unwrap() else {
            panic!("expected pixels");
        };

        assert_eq!(samples.len(), 80 * 60);
    }

    #[test]
    fn test_render_parallel_matches_sequential() {
        let mut explorer = Explorer::new(FractalKind::Mandelbrot, screen()).unwrap();
        let sequential = explorer.render().unwrap();

        explorer.set_parallel(true);

        assert_eq!(explorer.render().unwrap(), sequential);
    }

    #[test]
    fn test_render_geometry_frame() {
        let mut explorer = Explorer::new(FractalKind::SierpinskiCarpet, screen()).unwrap();
        explorer.set_depth(2).unwrap();

        let Frame::Primitives(primitives) = explorer.render().unwrap() else {
            panic!("expected primitives");
        };

        assert_eq!(primitives.len(), 1 + 1 + 9);
        assert!(primitives.iter().all(|p| p.kind() == PrimitiveKind::Quad));
    }

    #[test]
    fn test_zoom_box_outline_follows_fraction() {
        let mut explorer = Explorer::new(FractalKind::Mandelbrot, screen()).unwrap();
        explorer.zoom_box_mut().grow();

        let lines = explorer.zoom_box_outline(Point { x: 40, y: 30 });

        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.colour() == Colour::RED));
        // 0.30 of 80 wide, centred on x = 40.
        assert!((lines[0].vertices()[0].x - 28.0).abs() < 1e-9);
    }
}
