use roundel_engine::coords::{Rect, Vec2};
use roundel_engine::scene::DrawList;

use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the `DrawList` populated each frame by [`frame`](Self::frame).
///
/// Renderers (`RoundedBoxRenderer` or the CPU `Canvas`) receive the
/// `&mut DrawList` returned by `frame`.
#[derive(Default)]
pub struct UiScene {
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Paints `root` into `rect` and routes this frame's pointer input.
    ///
    /// Hover is delivered every frame; a click is delivered only when the
    /// root's `hit_test` accepts the cursor position.
    #[must_use]
    pub fn frame(&mut self, root: &mut Element, rect: Rect, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list, input.mouse_pos, input.mouse_pressed);
            root.paint(&mut painter, rect);
        }

        root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect);
        if input.mouse_clicked {
            if root.hit_test(rect, input.mouse_pos) {
                root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect);
            } else {
                log::trace!("click at ({}, {}) missed the root", input.mouse_pos.x, input.mouse_pos.y);
            }
        }

        &mut self.draw_list
    }
}
