use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::shape::codec::{self, EncodedPair};
use crate::shape::{Mode, ShapeConfig, ShapeParameters};

/// Per-shape transport record (48 bytes), one GPU instance per box.
///
///  offset  0  origin          [f32; 2]   loc 1
///  offset  8  size            [f32; 2]   loc 2
///  offset 16  radii           [f32; 2]   loc 3  EncodedPair bits: (tl, tr), (bl, br)
///  offset 24  falloff_border  [f32; 2]   loc 4  (falloff, border or full reference width)
///  offset 32  color           [f32; 4]   loc 5  premultiplied
///
/// `radii` holds raw packed words. Copy it, never do arithmetic on it.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ShapeInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub radii: [f32; 2],
    pub falloff_border: [f32; 2],
    pub color: [f32; 4],
}

impl ShapeInstance {
    pub const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x2, // radii (bit-packed)
        4 => Float32x2, // falloff_border
        5 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Packs a laid-out box. `rect` must be normalized and its size equal to
    /// `params.size`.
    pub fn new(rect: Rect, params: &ShapeParameters, color: Color) -> Self {
        debug_assert!(
            (rect.size.x - params.size.x).abs() <= 1e-3 && (rect.size.y - params.size.y).abs() <= 1e-3,
            "rect size {:?} differs from shape size {:?}",
            rect.size,
            params.size
        );
        let [top, bottom] = params.encoded_radii();
        Self {
            origin: [rect.origin.x, rect.origin.y],
            size: [params.size.x, params.size.y],
            radii: [top.to_channel(), bottom.to_channel()],
            falloff_border: [params.falloff, params.border_channel()],
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin[0], self.origin[1], self.size[0], self.size[1])
    }

    #[inline]
    pub fn encoded_radii(&self) -> [EncodedPair; 2] {
        self.radii.map(EncodedPair::from_channel)
    }

    /// Rebuilds the parameters the way the shader reads them back.
    pub fn decode(&self, config: ShapeConfig) -> ShapeParameters {
        let size = Vec2::new(self.size[0], self.size[1]);
        let half_min = size.min_element() * 0.5;
        let [top, bottom] = self.encoded_radii();
        let (tl, tr) = codec::decode(top);
        let (bl, br) = codec::decode(bottom);
        let [falloff, border] = self.falloff_border;

        let mut params = ShapeParameters {
            size,
            radii: [tl, tr, bl, br].map(|r| r * half_min),
            border_width: border,
            falloff,
            mode: Mode::Border,
            config,
        };
        if params.draws_filled() {
            params.mode = Mode::Fill;
        }
        params
    }

    #[inline]
    pub fn color(&self) -> Color {
        let [r, g, b, a] = self.color;
        Color::from_premul(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::RadiusSet;
    use crate::shape::codec::LEVELS;

    fn params(mode: Mode, border: f32) -> ShapeParameters {
        ShapeParameters::new(
            Vec2::new(120.0, 80.0),
            &RadiusSet::new(0.1, 0.35, 0.8, 1.0),
            border,
            1.5,
            mode,
            ShapeConfig::default(),
        )
    }

    #[test]
    fn layout_is_48_bytes() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 48);
    }

    #[test]
    fn decode_recovers_parameters_within_quantization() {
        for (mode, border) in [(Mode::Fill, 0.0), (Mode::Border, 0.3)] {
            let p = params(mode, border);
            let inst = ShapeInstance::new(Rect::new(5.0, 7.0, 120.0, 80.0), &p, Color::white());
            let d = inst.decode(ShapeConfig::default());

            assert_eq!(d.size, p.size);
            assert_eq!(d.falloff, p.falloff);
            assert_eq!(d.mode, mode);
            let half_min = 40.0;
            for (a, b) in d.radii.iter().zip(p.radii) {
                assert!((a - b).abs() <= half_min / LEVELS, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn decoded_coverage_matches_direct_coverage() {
        let p = params(Mode::Border, 0.3);
        let inst = ShapeInstance::new(Rect::new(0.0, 0.0, 120.0, 80.0), &p, Color::white());
        let d = inst.decode(ShapeConfig::default());
        for y in -45..=45 {
            for x in -65..=65 {
                let q = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                assert!((d.coverage(q) - p.coverage(q)).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn packed_words_survive_byte_copies() {
        let p = params(Mode::Fill, 0.0);
        let inst = ShapeInstance::new(Rect::new(0.0, 0.0, 120.0, 80.0), &p, Color::white());
        let bytes: Vec<u8> = bytemuck::bytes_of(&inst).to_vec();
        let back: ShapeInstance = bytemuck::pod_read_unaligned(&bytes);
        assert_eq!(back.encoded_radii(), p.encoded_radii());
    }
}
