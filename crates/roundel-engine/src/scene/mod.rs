//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod list;

pub use cmd::{DrawCmd, RoundedBoxCmd};
pub use list::{DrawItem, DrawList, SortKey, ZIndex};
