//! Distance -> coverage (alpha) for antialiased edges and border rings.

/// Hermite smoothstep; `edge0 > edge1` gives the inverted ramp.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Coverage of a sample at signed distance `distance` from the edge.
///
/// Symmetric ramp centered on the edge: `1` at `-falloff`, `0.5` on the
/// boundary, `0` at `+falloff`. A zero falloff is a hard edge.
#[inline]
pub fn coverage(distance: f32, falloff: f32) -> f32 {
    if falloff <= 0.0 {
        return if distance <= 0.0 { 1.0 } else { 0.0 };
    }
    smoothstep(falloff, -falloff, distance)
}

/// Turns a filled-shape distance into the distance to a ring whose contours
/// are the original boundary and the boundary inset by `2 * border`.
#[inline]
pub fn ring_distance(distance: f32, border: f32) -> f32 {
    (distance + border).abs() - border
}

/// Coverage of the border ring.
#[inline]
pub fn border_coverage(distance: f32, falloff: f32, border: f32) -> f32 {
    coverage(ring_distance(distance, border), falloff)
}

/// Border coverage that falls back to the filled shape once the ring would
/// swallow the whole interior.
///
/// `reference` is the full-border width (`shorter_side * max_factor`); the
/// ring degenerates when `(border + falloff) / reference` exceeds
/// `full_threshold`.
#[inline]
pub fn dynamic_coverage(
    distance: f32,
    falloff: f32,
    border: f32,
    reference: f32,
    full_threshold: f32,
) -> f32 {
    if super::ratio(border + falloff, reference) > full_threshold {
        coverage(distance, falloff)
    } else {
        border_coverage(distance, falloff, border)
    }
}
