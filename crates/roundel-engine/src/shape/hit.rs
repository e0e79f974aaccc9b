//! Pointer hit testing against the rendered rounded shape.

use crate::coords::Vec2;

use super::coverage::ring_distance;
use super::params::{Mode, ShapeParameters};

/// Which parts of the shape reject pointer hits.
///
/// `outside` rejects points beyond the rounded outline (the cut corners);
/// `inside` additionally rejects the hollow interior of a border ring.
/// With both off, the host's bounding-box test stands unchanged.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct HitTestFlags {
    pub outside: bool,
    pub inside: bool,
}

impl HitTestFlags {
    pub const NONE: Self = Self { outside: false, inside: false };
    pub const OUTSIDE: Self = Self { outside: true, inside: false };
    pub const BOTH: Self = Self { outside: true, inside: true };

    #[inline]
    pub fn any(self) -> bool {
        self.outside || self.inside
    }
}

/// Stateless point-in-shape predicate.
///
/// Uses the same ring construction as the border renderer with a hard
/// threshold in place of the antialiasing ramp, so the clickable area and the
/// drawn shape agree up to half the falloff band.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HitTester {
    pub flags: HitTestFlags,
}

impl HitTester {
    #[inline]
    pub const fn new(flags: HitTestFlags) -> Self {
        Self { flags }
    }

    /// Only an inside-testing border keeps its hollow center, and only while
    /// the ring is actually drawn as a ring.
    #[inline]
    pub fn is_hollow(&self, params: &ShapeParameters) -> bool {
        self.flags.inside && params.mode == Mode::Border && !params.draws_filled()
    }

    /// Ring parameter used for the test: the shape's border for a hollow
    /// test, the full reference width otherwise.
    #[inline]
    pub fn effective_border(&self, params: &ShapeParameters) -> f32 {
        if self.is_hollow(params) {
            params.border_width
        } else {
            params.reference_width()
        }
    }

    /// `true` when the box-centered point `p` hits the shape.
    #[inline]
    pub fn contains(&self, params: &ShapeParameters, p: Vec2) -> bool {
        if !self.flags.any() {
            return true;
        }
        let distance = params.distance(p);
        // A full-width ring has the sign of the plain distance everywhere
        // except its innermost contour, so solid tests skip the fold.
        let d = if self.is_hollow(params) {
            ring_distance(distance, self.effective_border(params))
        } else {
            distance
        };
        d - params.falloff * 0.5 < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::RadiusSet;
    use crate::shape::ShapeConfig;

    fn shape(mode: Mode, border: f32) -> ShapeParameters {
        ShapeParameters::new(
            Vec2::new(100.0, 100.0),
            &RadiusSet::all(0.2),
            border,
            1.0,
            mode,
            ShapeConfig::default(),
        )
    }

    #[test]
    fn disabled_flags_accept_everything() {
        let t = HitTester::new(HitTestFlags::NONE);
        let p = shape(Mode::Fill, 0.0);
        assert!(t.contains(&p, Vec2::new(49.9, 49.9)));
        assert!(t.contains(&p, Vec2::new(500.0, -500.0)));
    }

    #[test]
    fn rounded_corners_reject_hits() {
        let t = HitTester::new(HitTestFlags::OUTSIDE);
        let p = shape(Mode::Fill, 0.0);
        // Radius 10 in each corner: the extreme corner pixel is cut away.
        assert!(!t.contains(&p, Vec2::new(49.0, -49.0)));
        assert!(t.contains(&p, Vec2::new(49.0, 0.0)));
        assert!(t.contains(&p, Vec2::zero()));
        assert!(!t.contains(&p, Vec2::new(52.0, 0.0)));
    }

    #[test]
    fn threshold_sits_half_a_falloff_outside() {
        let t = HitTester::new(HitTestFlags::OUTSIDE);
        let p = shape(Mode::Fill, 0.0);
        assert!(t.contains(&p, Vec2::new(50.4, 0.0)));
        assert!(!t.contains(&p, Vec2::new(50.6, 0.0)));
    }

    #[test]
    fn fill_interior_is_always_hit() {
        let sharp_edge = ShapeParameters::new(
            Vec2::new(100.0, 100.0),
            &RadiusSet::all(0.2),
            0.0,
            0.0,
            Mode::Fill,
            ShapeConfig::default(),
        );
        for flags in [HitTestFlags::OUTSIDE, HitTestFlags::BOTH] {
            let t = HitTester::new(flags);
            assert_eq!(t.effective_border(&sharp_edge), 25.0);
            assert!(t.contains(&shape(Mode::Fill, 0.0), Vec2::zero()));
            // Deepest point with no falloff band.
            assert!(t.contains(&sharp_edge, Vec2::zero()));
            assert!(t.contains(&sharp_edge, Vec2::new(0.0, 30.0)));
        }
    }

    #[test]
    fn border_center_is_hollow_only_with_inside_testing() {
        let ring = shape(Mode::Border, 0.2); // ring parameter 5, 10 px thick
        assert!(HitTester::new(HitTestFlags::OUTSIDE).contains(&ring, Vec2::zero()));
        let both = HitTester::new(HitTestFlags::BOTH);
        assert!(!both.contains(&ring, Vec2::zero()));
        assert!(both.contains(&ring, Vec2::new(45.0, 0.0)));
        assert!(!both.contains(&ring, Vec2::new(35.0, 0.0)));
    }

    #[test]
    fn border_drawn_filled_is_solid_to_clicks() {
        // Ring parameter 20 plus falloff 5 reaches the reference width 25.
        let wide = ShapeParameters::new(
            Vec2::new(100.0, 100.0),
            &RadiusSet::all(0.2),
            0.8,
            5.0,
            Mode::Border,
            ShapeConfig::default(),
        );
        assert!(wide.draws_filled());
        let t = HitTester::new(HitTestFlags::BOTH);
        assert!(!t.is_hollow(&wide));
        for x in [0.0, 4.0, 7.0, 8.0, 30.0] {
            let p = Vec2::new(x, 0.0);
            assert_eq!(wide.coverage(p), 1.0);
            assert!(t.contains(&wide, p), "x={x}");
        }
        assert!(!t.contains(&wide, Vec2::new(53.0, 0.0)));
    }

    #[test]
    fn inside_only_still_tests_the_outline() {
        let t = HitTester::new(HitTestFlags { outside: false, inside: true });
        let ring = shape(Mode::Border, 0.2);
        assert!(!t.contains(&ring, Vec2::new(60.0, 0.0)));
    }

    #[test]
    fn zero_sized_shape_is_finite() {
        let p = ShapeParameters::new(
            Vec2::zero(),
            &RadiusSet::all(1.0),
            1.0,
            2.0,
            Mode::Border,
            ShapeConfig::default(),
        );
        let t = HitTester::new(HitTestFlags::BOTH);
        assert!(t.contains(&p, Vec2::new(0.5, 0.0)));
        assert!(!t.contains(&p, Vec2::new(5.0, 0.0)));
    }
}
