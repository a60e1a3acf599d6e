use crate::core::data::screen::Screen;
use crate::core::data::view_rect::{ViewRect, ViewRectError};
use crate::core::fractals::plane_fractal::{PlaneFractalError, PlaneFractalKind, PlaneRenderer};

/// Everything needed to classify one frame of a per-pixel fractal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameConfig {
    pub fractal: PlaneFractalKind,
    pub view: ViewRect,
    pub screen: Screen,
    pub max_iterations: u32,
}

impl FrameConfig {
    /// The fractal's opening view and iteration limit on `screen`.
    pub fn for_kind(fractal: PlaneFractalKind, screen: Screen) -> Result<Self, ViewRectError> {
        Ok(Self {
            fractal,
            view: fractal.default_view().to_view(screen)?,
            screen,
            max_iterations: fractal.default_max_iterations(),
        })
    }

    pub fn renderer(&self) -> Result<PlaneRenderer, PlaneFractalError> {
        let fractal = self.fractal.build(self.max_iterations)?;

        Ok(PlaneRenderer::new(fractal, self.view, self.screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind_uses_fractal_defaults() {
        let screen = Screen::new(800, 600).unwrap();

        let config = FrameConfig::for_kind(PlaneFractalKind::BurningShip, screen).unwrap();

        assert_eq!(config.max_iterations, 40);
        assert_eq!(config.view.real_min(), -2.0);
        assert_eq!(config.view.real_max(), 1.2);
        assert_eq!(config.view.imag_min(), -1.6);
        // 3.2 * 600 / 800 = 2.4
        assert!((config.view.imag_max() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_renderer_rejects_zero_iterations() {
        let screen = Screen::new(10, 10).unwrap();
        let mut config = FrameConfig::for_kind(PlaneFractalKind::Mandelbrot, screen).unwrap();
        config.max_iterations = 0;

        assert!(config.renderer().is_err());
    }
}
