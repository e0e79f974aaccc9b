//! Roundel UI: host glue on top of `roundel-engine`.
//!
//! Turns host geometry (a layout rect, a pivot, an optional aspect ratio)
//! into shape snapshots, records them into a `DrawList`, and routes pointer
//! events only to widgets whose rounded shape contains the cursor.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use roundel_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut root = Element::new(
//!     RoundedBox::new()
//!         .radii(RadiusSet::all(0.5))?
//!         .color(Color::from_straight(0.2, 0.5, 1.0, 1.0))
//!         .on_click(|| log::info!("clicked")),
//! );
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_clicked, mouse_pressed };
//! let draw_list = scene.frame(&mut root, Rect::new(0.0, 0.0, 320.0, 200.0), &input);
//! renderer.render(&rctx, &mut target, draw_list);
//! ```

pub mod event;
pub mod layout;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI.
pub mod prelude {
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::layout::{Pivot, fit_rect};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{rounded_box::RoundedBox, stack::Stack};

    pub use roundel_engine::ShapeError;
    pub use roundel_engine::coords::{Corner, RadiusSet, Rect, Vec2};
    pub use roundel_engine::paint::Color;
    pub use roundel_engine::shape::{HitTestFlags, Mode, RoundingUnit, ShapeConfig};
}
