use crate::coords::Rect;
use crate::paint::Color;
use crate::shape::ShapeParameters;

/// One rounded box, already laid out.
///
/// `rect` places the box in logical pixels; `params.size` equals
/// `rect.size`. The parameters are the same snapshot the hit tester sees.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedBoxCmd {
    pub rect: Rect,
    pub params: ShapeParameters,
    pub color: Color,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedBox(RoundedBoxCmd),
}
