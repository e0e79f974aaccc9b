//! TOML shape description.
//!
//! ```toml
//! unit = "world"          # or "percentage"
//! mode = "border"         # or "fill"
//! border = 6.0
//! falloff = 1.0
//! color = [51, 128, 255, 255]
//!
//! [radii]
//! all = 8.0               # default for corners left out below
//! top_left = 32.0
//!
//! [hit_test]
//! outside = true
//! inside = true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use roundel_engine::coords::{Corner, Rect};
use roundel_engine::paint::Color;
use roundel_engine::shape::{HitTestFlags, Mode, RoundingUnit};
use roundel_ui::layout::Pivot;
use roundel_ui::widgets::rounded_box::RoundedBox;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeFile {
    pub unit: Option<String>,
    pub mode: Option<String>,
    pub radii: RadiiTable,
    pub border: f32,
    pub falloff: Option<f32>,
    pub hit_test: HitTestTable,
    pub pivot: Option<[f32; 2]>,
    /// Width / height to preserve inside the host rect.
    pub aspect: Option<f32>,
    /// Straight RGBA bytes.
    pub color: Option<[u8; 4]>,
    /// Host rect `[x, y, w, h]`; defaults to the whole canvas.
    pub rect: Option<[f32; 4]>,
    pub canvas: CanvasTable,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RadiiTable {
    pub all: f32,
    pub top_left: Option<f32>,
    pub top_right: Option<f32>,
    pub bottom_left: Option<f32>,
    pub bottom_right: Option<f32>,
}

impl RadiiTable {
    fn get(&self, corner: Corner) -> f32 {
        let v = match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        };
        v.unwrap_or(self.all)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HitTestTable {
    pub outside: bool,
    pub inside: bool,
}

impl Default for HitTestTable {
    fn default() -> Self {
        Self { outside: true, inside: true }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasTable {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 4],
}

impl Default for CanvasTable {
    fn default() -> Self {
        Self { width: 256, height: 256, background: [0, 0, 0, 0] }
    }
}

impl ShapeFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading shape file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in shape file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing shape TOML")
    }

    /// Host rect inside a `width x height` canvas.
    pub fn host_rect(&self, width: u32, height: u32) -> Rect {
        match self.rect {
            Some([x, y, w, h]) => Rect::new(x, y, w, h),
            None => Rect::new(0.0, 0.0, width as f32, height as f32),
        }
    }

    /// Builds the element. World-unit values convert against `host`.
    pub fn build(&self, host: Rect) -> Result<RoundedBox> {
        let unit: RoundingUnit = self.unit.as_deref().unwrap_or("percentage").parse()?;
        let mode: Mode = self.mode.as_deref().unwrap_or("fill").parse()?;

        let mut shape = RoundedBox::new()
            .mode(mode)
            .hit_test_flags(HitTestFlags { outside: self.hit_test.outside, inside: self.hit_test.inside })
            .preserve_aspect(self.aspect);
        if let Some([x, y]) = self.pivot {
            shape = shape.pivot(Pivot::new(x, y));
        }
        if let Some([r, g, b, a]) = self.color {
            shape = shape.color(Color::from_straight_u8(r, g, b, a));
        }

        shape.set_rect(host);
        shape.set_unit(unit);
        for corner in Corner::ALL {
            shape
                .set_corner_radius(corner, self.radii.get(corner))
                .with_context(|| format!("radius of {corner:?}"))?;
        }
        shape.set_border_thickness(self.border).context("border")?;
        if let Some(falloff) = self.falloff {
            shape.set_falloff(falloff)?;
        }
        Ok(shape)
    }
}
