use crate::core::data::view_rect::ViewRect;

/// LIFO history of views, pushed before each zoom-in so it can be undone.
///
/// An empty stack means the outermost view is on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoomStack {
    views: Vec<ViewRect>,
}

impl ZoomStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, view: ViewRect) {
        self.views.push(view);
    }

    /// Removes and returns the most recent view, or `None` when empty.
    pub fn pop(&mut self) -> Option<ViewRect> {
        self.views.pop()
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    #[must_use]
    pub fn peek(&self) -> Option<&ViewRect> {
        self.views.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
