//! Coordinate and geometry types shared across the geometry core, renderers and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Shape-local space (SDF, hit testing) is centered on the box, same axes.

mod corner;
mod rect;
mod vec2;
mod viewport;

pub use corner::{Corner, RadiusSet};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
