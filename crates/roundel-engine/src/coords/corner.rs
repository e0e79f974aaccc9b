use super::Vec2;

/// One of the four corners of a box.
///
/// The discriminant is the corner's slot in every per-corner array
/// (`RadiusSet`, SDF radii, transport pairs) and equals the 2-bit quadrant
/// code of [`Corner::of_point`]: bit 0 set for the right half, bit 1 set for
/// the bottom half (+Y down).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Quadrant code of a box-centered point. Points on an axis belong to the
    /// right / bottom side.
    #[inline]
    pub fn quadrant(p: Vec2) -> usize {
        (((p.y >= 0.0) as usize) << 1) | ((p.x >= 0.0) as usize)
    }

    #[inline]
    pub fn of_point(p: Vec2) -> Corner {
        Corner::ALL[Corner::quadrant(p)]
    }
}

/// Normalized per-corner radii.
///
/// `1.0` is half the shorter side of the box (a full pill end), `0.0` a sharp
/// corner. Values are validated by the setters that produce them; this type
/// itself does not clamp.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RadiusSet(pub [f32; 4]);

impl RadiusSet {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self([top_left, top_right, bottom_left, bottom_right])
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self([r; 4])
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> f32 {
        self.0[corner.index()]
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, value: f32) {
        self.0[corner.index()] = value;
    }

    /// Scales every radius by `k` (normalized -> absolute length).
    #[inline]
    pub fn scaled(&self, k: f32) -> [f32; 4] {
        self.0.map(|r| r * k)
    }
}
