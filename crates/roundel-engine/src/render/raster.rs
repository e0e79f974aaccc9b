use rayon::prelude::*;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::shape::ShapeConfig;

use super::ShapeInstance;

/// CPU reference rasterizer over a premultiplied RGBA buffer.
///
/// Samples pixel centers (`x + 0.5`, `y + 0.5`) in logical pixels, one logical
/// pixel per buffer pixel. Shapes are evaluated from their [`ShapeInstance`],
/// the same packed record the GPU renderer uploads.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    config: ShapeConfig,
}

impl Canvas {
    pub fn new(width: usize, height: usize, config: ShapeConfig) -> Self {
        Self { width, height, pixels: vec![Color::transparent(); width * height], config }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Coverage of one instance for every pixel, row-major.
    pub fn coverage_mask(&self, instance: &ShapeInstance) -> Vec<f32> {
        let mut mask = vec![0.0f32; self.width * self.height];
        let Some((x0, x1, y0, y1)) = self.bounds(instance) else { return mask; };
        let params = instance.decode(self.config);
        let center = instance.rect().center();

        mask.par_chunks_mut(self.width.max(1))
            .enumerate()
            .skip(y0)
            .take(y1 - y0)
            .for_each(|(y, row)| {
                let py = y as f32 + 0.5;
                for (x, out) in row.iter_mut().enumerate().take(x1).skip(x0) {
                    let p = Vec2::new(x as f32 + 0.5, py) - center;
                    *out = params.coverage(p);
                }
            });
        mask
    }

    /// Composites one instance with source-over.
    pub fn draw(&mut self, instance: &ShapeInstance) {
        let Some((x0, x1, y0, y1)) = self.bounds(instance) else { return; };
        let params = instance.decode(self.config);
        let center = instance.rect().center();
        let color = instance.color();

        self.pixels
            .par_chunks_mut(self.width.max(1))
            .enumerate()
            .skip(y0)
            .take(y1 - y0)
            .for_each(|(y, row)| {
                let py = y as f32 + 0.5;
                for (x, dst) in row.iter_mut().enumerate().take(x1).skip(x0) {
                    let c = params.coverage(Vec2::new(x as f32 + 0.5, py) - center);
                    if c > 0.0 {
                        *dst = color.with_coverage(c).over(*dst);
                    }
                }
            });
    }

    /// Draws every command of `draw_list` back-to-front.
    pub fn draw_list(&mut self, draw_list: &mut DrawList) {
        let mut drawn = 0usize;
        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::RoundedBox(cmd) = &item.cmd;
            let r = cmd.rect.normalized();
            if r.is_empty() {
                continue;
            }
            if cmd.params.config != self.config {
                log::warn!("Canvas: shape built with {:?}, canvas uses {:?}", cmd.params.config, self.config);
            }
            self.draw(&ShapeInstance::new(r, &cmd.params, cmd.color));
            drawn += 1;
        }
        log::trace!("Canvas: rasterized {drawn} boxes into {}x{}", self.width, self.height);
    }

    /// Straight-alpha RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_straight_u8()).collect()
    }

    /// Pixel range `[x0, x1) x [y0, y1)` a shape can touch: its rect grown by
    /// the falloff band, clipped to the canvas.
    fn bounds(&self, instance: &ShapeInstance) -> Option<(usize, usize, usize, usize)> {
        let r = instance.rect();
        if !r.is_finite() || r.is_empty() {
            return None;
        }
        let pad = instance.falloff_border[0].max(0.0) + 1.0;
        let clip = |v: f32, hi: usize| (v.max(0.0) as usize).min(hi);
        let x0 = clip((r.origin.x - pad).floor(), self.width);
        let y0 = clip((r.origin.y - pad).floor(), self.height);
        let x1 = clip((r.origin.x + r.size.x + pad).ceil(), self.width);
        let y1 = clip((r.origin.y + r.size.y + pad).ceil(), self.height);
        (x0 < x1 && y0 < y1).then_some((x0, x1, y0, y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{RadiusSet, Rect};
    use crate::shape::{HitTestFlags, HitTester, Mode, ShapeParameters};

    fn square(mode: Mode, border: f32) -> (Rect, ShapeParameters) {
        let rect = Rect::new(10.0, 10.0, 100.0, 100.0);
        let params = ShapeParameters::new(
            rect.size,
            &RadiusSet::all(0.2),
            border,
            1.0,
            mode,
            ShapeConfig::default(),
        );
        (rect, params)
    }

    #[test]
    fn hit_test_agrees_with_rendered_coverage() {
        let (rect, params) = square(Mode::Fill, 0.0);
        let canvas = Canvas::new(120, 120, ShapeConfig::default());
        let mask = canvas.coverage_mask(&ShapeInstance::new(rect, &params, Color::white()));
        let tester = HitTester::new(HitTestFlags::BOTH);

        let mut checked = 0;
        for y in 0..120 {
            for x in 0..120 {
                let local = rect.to_local(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                let d = params.distance(local);
                let cov = mask[y * 120 + x];
                if d <= -params.falloff - 0.01 {
                    assert!(tester.contains(&params, local), "({x},{y}) d={d}");
                    assert!(cov > 0.99, "({x},{y}) coverage {cov}");
                    checked += 1;
                } else if d >= params.falloff + 0.01 {
                    assert!(!tester.contains(&params, local), "({x},{y}) d={d}");
                    assert!(cov < 0.01, "({x},{y}) coverage {cov}");
                    checked += 1;
                }
            }
        }
        assert!(checked > 10_000);
    }

    #[test]
    fn ring_leaves_center_empty() {
        let (rect, params) = square(Mode::Border, 0.2);
        let canvas = Canvas::new(120, 120, ShapeConfig::default());
        let mask = canvas.coverage_mask(&ShapeInstance::new(rect, &params, Color::white()));
        assert_eq!(mask[60 * 120 + 60], 0.0);
        // 5 px into the left edge: middle of the 10 px ring.
        assert!(mask[60 * 120 + 14] > 0.99);
        assert_eq!(mask[60 * 120 + 2], 0.0);
    }

    #[test]
    fn rounded_corner_pixels_are_transparent() {
        let (rect, params) = square(Mode::Fill, 0.0);
        let mut canvas = Canvas::new(120, 120, ShapeConfig::default());
        let mut list = DrawList::new();
        list.push_rounded_box(crate::scene::ZIndex::new(0), rect, params, Color::white());
        canvas.draw_list(&mut list);

        assert_eq!(canvas.pixel(10, 10), Color::transparent());
        assert_eq!(canvas.pixel(60, 60), Color::white());
        assert_eq!(canvas.pixel(60, 10), Color::white().with_coverage(canvas.pixel(60, 10).a));
        assert_eq!(canvas.to_rgba8().len(), 120 * 120 * 4);
    }

    #[test]
    fn offscreen_shapes_are_skipped() {
        let rect = Rect::new(-500.0, -500.0, 20.0, 20.0);
        let params = ShapeParameters::new(
            rect.size,
            &RadiusSet::zero(),
            0.0,
            1.0,
            Mode::Fill,
            ShapeConfig::default(),
        );
        let canvas = Canvas::new(16, 16, ShapeConfig::default());
        let mask = canvas.coverage_mask(&ShapeInstance::new(rect, &params, Color::white()));
        assert!(mask.iter().all(|&c| c == 0.0));
    }
}
