use roundel_engine::coords::{Rect, Vec2};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A child inside a [`Stack`], placed at a fixed rect relative to the
/// parent's origin.
pub struct StackItem {
    pub element: Element,
    pub rect: Rect,
}

/// Overlapping children, painted first-to-last.
///
/// Pointer events go to the topmost child whose `hit_test` accepts the
/// position, so a click through the cut-away corner of a rounded box reaches
/// whatever is drawn beneath it.
///
/// # Example
/// ```rust,ignore
/// Stack::new()
///     .child(Rect::new(0.0, 0.0, 200.0, 200.0), background)
///     .child(Rect::new(50.0, 50.0, 100.0, 100.0), RoundedBox::new().radii(RadiusSet::all(1.0))?)
/// ```
pub struct Stack {
    items: Vec<StackItem>,
}

impl Stack {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn child(mut self, rect: Rect, element: impl Into<Element>) -> Self {
        self.items.push(StackItem { element: element.into(), rect });
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn child_rect(parent: Rect, item: &StackItem) -> Rect {
        Rect::from_origin_size(parent.origin + item.rect.origin, item.rect.size)
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Stack {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for item in &self.items {
            item.element.paint(painter, Self::child_rect(rect, item));
        }
    }

    fn hit_test(&self, rect: Rect, pos: Vec2) -> bool {
        self.items.iter().any(|item| item.element.hit_test(Self::child_rect(rect, item), pos))
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let pos = event.pos();
        // Topmost first; hover reaches every child so each can track it.
        for item in self.items.iter_mut().rev() {
            let child = Self::child_rect(rect, item);
            match event {
                UiEvent::Hover { .. } => {
                    item.element.on_event(event, child);
                }
                UiEvent::Click { .. } => {
                    if item.element.hit_test(child, pos) {
                        return item.element.on_event(event, child);
                    }
                }
            }
        }
        EventResult::Ignored
    }
}
