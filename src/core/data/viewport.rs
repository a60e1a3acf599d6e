use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::screen::Screen;
use crate::core::data::view_rect::ViewRect;
use crate::core::data::zoom_stack::ZoomStack;
use crate::core::util::compute_zoom_rect::{ZoomError, compute_zoom_rect};
use crate::core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};

/// Current view onto the plane together with the screen it is drawn on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    view: ViewRect,
    screen: Screen,
}

impl Viewport {
    #[must_use]
    pub fn new(view: ViewRect, screen: Screen) -> Self {
        Self { view, screen }
    }

    #[must_use]
    pub fn view(&self) -> ViewRect {
        self.view
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn pixel_to_plane(&self, pixel: Point) -> Result<Complex, PixelToPlaneError> {
        pixel_to_plane(pixel, self.view, self.screen)
    }

    /// Saves the current view on `history` and zooms onto the box around
    /// `centre`. On error neither the view nor the history changes.
    pub fn zoom_in(
        &mut self,
        centre: Point,
        zoom_fraction: f64,
        history: &mut ZoomStack,
    ) -> Result<(), ZoomError> {
        let zoomed = compute_zoom_rect(self.view, self.screen, centre, zoom_fraction)?;

        history.push(self.view);
        self.view = zoomed;

        Ok(())
    }

    /// Restores the most recent view from `history`. Returns `false` when
    /// already at the outermost view.
    pub fn zoom_out(&mut self, history: &mut ZoomStack) -> bool {
        match history.pop() {
            Some(previous) => {
                self.view = previous;
                true
            }
            None => false,
        }
    }

    /// Jumps to `view` and forgets the zoom history.
    pub fn reset(&mut self, view: ViewRect, history: &mut ZoomStack) {
        history.clear();
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(
            ViewRect::new(-2.0, 2.0, -1.5, 1.5).unwrap(),
            Screen::new(400, 300).unwrap(),
        )
    }

    #[test]
    fn test_zoom_in_pushes_previous_view() {
        let mut viewport = viewport();
        let mut history = ZoomStack::new();
        let original = viewport.view();

        viewport
            .zoom_in(Point { x: 200, y: 150 }, 0.25, &mut history)
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history.peek(), Some(&original));
        assert!(viewport.view().width() < original.width());
    }

    #[test]
    fn test_zoom_out_reverses_zoom_in() {
        let mut viewport = viewport();
        let mut history = ZoomStack::new();
        let original = viewport.view();

        viewport
            .zoom_in(Point { x: 10, y: 20 }, 0.5, &mut history)
            .unwrap();
        let first = viewport.view();
        viewport
            .zoom_in(Point { x: 390, y: 280 }, 0.1, &mut history)
            .unwrap();

        assert!(viewport.zoom_out(&mut history));
        assert_eq!(viewport.view(), first);
        assert!(viewport.zoom_out(&mut history));
        assert_eq!(viewport.view(), original);
        assert!(!viewport.zoom_out(&mut history));
        assert_eq!(viewport.view(), original);
    }

    #[test]
    fn test_failed_zoom_leaves_state_untouched() {
        let mut viewport = viewport();
        let mut history = ZoomStack::new();
        let original = viewport.view();

        let result = viewport.zoom_in(Point { x: 200, y: 150 }, 0.0, &mut history);

        assert!(result.is_err());
        assert!(history.is_empty());
        assert_eq!(viewport.view(), original);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut viewport = viewport();
        let mut history = ZoomStack::new();
        let original = viewport.view();

        viewport
            .zoom_in(Point { x: 200, y: 150 }, 0.5, &mut history)
            .unwrap();
        viewport.reset(original, &mut history);

        assert!(history.is_empty());
        assert_eq!(viewport.view(), original);
    }

    #[test]
    fn test_pixel_to_plane_uses_current_view() {
        let mut viewport = viewport();
        let mut history = ZoomStack::new();
        let pixel = Point { x: 0, y: 0 };
        let before = viewport.pixel_to_plane(pixel).unwrap();

        viewport
            .zoom_in(Point { x: 200, y: 150 }, 0.5, &mut history)
            .unwrap();

        assert_ne!(viewport.pixel_to_plane(pixel).unwrap(), before);
    }
}
