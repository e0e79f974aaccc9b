//! Roundel engine crate.
//!
//! Geometry core for rounded-corner boxes plus the two consumers that must
//! agree on it: the renderers (GPU and CPU) and the pointer hit tester.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shape;

mod error;

pub use error::ShapeError;
