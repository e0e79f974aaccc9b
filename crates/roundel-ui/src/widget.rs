use roundel_engine::coords::{Rect, Vec2};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The core trait every UI component implements.
pub trait Widget: 'static {
    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Whether the pointer at `pos` lands on this widget.
    ///
    /// Defaults to the rectangular bounds; shaped widgets narrow it.
    fn hit_test(&self, rect: Rect, pos: Vec2) -> bool {
        rect.contains(pos)
    }

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}

/// A type-erased widget, the universal child type for containers.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn hit_test(&self, rect: Rect, pos: Vec2) -> bool {
        self.0.hit_test(rect, pos)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
