//! Rendering path.
//!
//! Both renderers consume [`ShapeInstance`], the packed per-shape transport
//! record, so they see exactly the same (quantized) radii:
//! - [`RoundedBoxRenderer`]: instanced wgpu pipeline, one quad per box.
//! - [`Canvas`]: CPU reference rasterizer, rows evaluated in parallel.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod instance;
mod raster;
mod rounded_box;

pub use ctx::{RenderCtx, RenderTarget};
pub use instance::ShapeInstance;
pub use raster::Canvas;
pub use rounded_box::RoundedBoxRenderer;
