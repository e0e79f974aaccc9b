//! Fill color shared between UI and renderers.
//!
//! Shapes carry a single solid color; coverage from the geometry core scales
//! it before blending.

mod color;

pub use color::Color;
