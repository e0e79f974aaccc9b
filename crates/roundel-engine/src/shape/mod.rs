//! Rounded-box geometry core.
//!
//! Everything here is pure `Copy` math shared by the rendering path
//! (`render::*`, WGSL) and the pointer path (`hit`):
//!
//! ```text
//! RoundedBox inputs ──► ShapeParameters ──┬─► codec ─► ShapeInstance ─► sdf ─► coverage
//!                                         └─────────────────────────► sdf ─► hit
//! ```
//!
//! The WGSL shader in `render/shaders/rounded_box.wgsl` mirrors `sdf` and
//! `coverage` line for line; change both together.

pub mod codec;
pub mod coverage;
pub mod hit;
pub mod params;
pub mod sdf;
pub mod units;

pub use codec::EncodedPair;
pub use hit::{HitTestFlags, HitTester};
pub use params::{Mode, ShapeConfig, ShapeParameters};
pub use units::RoundingUnit;

/// Clamps to `[0, 1]`, mapping NaN to `0`.
#[inline]
pub(crate) fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// `num / den`, or `0` when the denominator is not positive.
///
/// Zero-sized boxes produce zero ratios instead of NaN/inf.
#[inline]
pub(crate) fn ratio(num: f32, den: f32) -> f32 {
    if den > 0.0 { num / den } else { 0.0 }
}
