//! Signed distance to a box with four independent corner radii.

use crate::coords::{Corner, Vec2};

/// Signed distance from `p` (box-centered) to the rounded box boundary.
///
/// `radii` are absolute lengths indexed by [`Corner`]; each must lie in
/// `[0, min(half_size)]`. Negative inside, zero on the boundary, positive
/// outside.
///
/// Only the radius of the quadrant containing `p` matters. Straight edges do
/// not depend on the radius at all, so switching radius across an axis is
/// continuous.
#[inline]
pub fn distance(p: Vec2, half_size: Vec2, radii: &[f32; 4]) -> f32 {
    let r = radii[Corner::quadrant(p)];
    let q = p.abs() - half_size + Vec2::splat(r);
    q.max_element().min(0.0) + q.max(Vec2::zero()).length() - r
}
