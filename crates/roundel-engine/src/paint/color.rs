/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight-alpha RGBA bytes, scaled to
    /// `0..=1` as-is (no sRGB decoding).
    #[inline]
    pub fn from_straight_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color weighted by a coverage value in `[0, 1]`.
    #[inline]
    pub fn with_coverage(self, coverage: f32) -> Self {
        let k = coverage.clamp(0.0, 1.0);
        Self::from_premul(self.r * k, self.g * k, self.b * k, self.a * k)
    }

    /// Premultiplied source-over: `self` drawn on top of `dst`.
    #[inline]
    pub fn over(self, dst: Color) -> Self {
        let k = 1.0 - self.a;
        Self::from_premul(
            self.r + dst.r * k,
            self.g + dst.g * k,
            self.b + dst.b * k,
            self.a + dst.a * k,
        )
    }

    /// Straight-alpha RGBA bytes (for image export).
    pub fn to_straight_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        if self.a <= 0.0 {
            return [0, 0, 0, 0];
        }
        let inv = 1.0 / self.a;
        [q(self.r * inv), q(self.g * inv), q(self.b * inv), q(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn bytes_are_scaled_without_gamma() {
        let c = Color::from_straight_u8(255, 128, 0, 255);
        assert_eq!(c.g, 128.0 / 255.0);
        assert_eq!(c.to_straight_u8(), [255, 128, 0, 255]);
    }

    #[test]
    fn over_opaque_replaces() {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        assert_eq!(red.over(Color::white()), red);
    }

    #[test]
    fn coverage_scales_all_channels() {
        let c = Color::white().with_coverage(0.25);
        assert_eq!(c, Color::from_premul(0.25, 0.25, 0.25, 0.25));
        assert_eq!(c.to_straight_u8(), [255, 255, 255, 64]);
        assert_eq!(Color::transparent().to_straight_u8(), [0, 0, 0, 0]);
    }
}
