use roundel_engine::coords::{Rect, Vec2};
use roundel_engine::paint::Color;
use roundel_engine::scene::{DrawList, ZIndex};
use roundel_engine::shape::ShapeParameters;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and exposes the pointer state of the frame
/// so widgets can pick hover visuals while painting.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    z: i32,
    /// Current mouse position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, mouse_pos: Vec2, mouse_pressed: bool) -> Self {
        Self { draw_list, z: 0, mouse_pos, mouse_pressed }
    }

    /// Records a laid-out rounded box. `rect.size` must equal `params.size`.
    pub fn fill_rounded_box(&mut self, rect: Rect, params: ShapeParameters, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rounded_box(z, rect, params, color);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
