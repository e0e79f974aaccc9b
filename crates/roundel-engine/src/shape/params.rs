use std::fmt;
use std::str::FromStr;

use crate::ShapeError;
use crate::coords::{RadiusSet, Vec2};

use super::codec::{self, EncodedPair};
use super::{coverage, sdf};

/// Whether the box is drawn solid or as a ring of `border_width`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    #[default]
    Fill,
    Border,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Fill => "fill",
            Mode::Border => "border",
        })
    }
}

impl FromStr for Mode {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fill" => Ok(Mode::Fill),
            "border" | "ring" => Ok(Mode::Border),
            _ => Err(ShapeError::UnknownMode(s.to_owned())),
        }
    }
}

/// Policy constants shared by the renderers and the hit tester.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeConfig {
    /// Full-border reference width as a fraction of the shorter side.
    ///
    /// A ring of parameter `b` is `2 * b` thick, so `0.25` makes a full border
    /// exactly fill the box.
    pub max_factor: f32,
    /// `(border + falloff) / reference` above which a border is drawn filled.
    pub full_border_threshold: f32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self { max_factor: 0.25, full_border_threshold: 0.999 }
    }
}

/// Immutable geometric snapshot of one rounded box.
///
/// Recompute a new value whenever any input changes; both the renderers and
/// the hit tester read the same snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeParameters {
    /// Width and height in logical pixels. Never negative.
    pub size: Vec2,
    /// Absolute corner radii indexed by `Corner`.
    pub radii: [f32; 4],
    /// Ring parameter `b` of `|d + b| - b` (ring thickness is `2 * b`).
    pub border_width: f32,
    /// Antialiasing band half-width.
    pub falloff: f32,
    pub mode: Mode,
    pub config: ShapeConfig,
}

impl ShapeParameters {
    /// Builds parameters from normalized inputs.
    ///
    /// `radii` and `border` are in `[0, 1]` (validated by the caller; clamped
    /// here so the codec never sees out-of-range values).
    pub fn new(
        size: Vec2,
        radii: &RadiusSet,
        border: f32,
        falloff: f32,
        mode: Mode,
        config: ShapeConfig,
    ) -> Self {
        let size = size.max(Vec2::zero());
        let half_min = size.min_element() * 0.5;
        let radii = RadiusSet(radii.0.map(super::clamp01)).scaled(half_min);
        let reference = size.min_element() * config.max_factor;

        Self {
            size,
            radii,
            border_width: super::clamp01(border) * reference,
            falloff: falloff.max(0.0),
            mode,
            config,
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn shorter_side(&self) -> f32 {
        self.size.min_element()
    }

    /// Border width that fills the whole box.
    #[inline]
    pub fn reference_width(&self) -> f32 {
        self.shorter_side() * self.config.max_factor
    }

    /// Value carried in the border transport channel: the ring parameter in
    /// border mode, the full reference width in fill mode.
    #[inline]
    pub fn border_channel(&self) -> f32 {
        match self.mode {
            Mode::Fill => self.reference_width(),
            Mode::Border => self.border_width,
        }
    }

    /// True when the ring is wide enough that it is drawn as a filled box.
    #[inline]
    pub fn draws_filled(&self) -> bool {
        super::ratio(self.border_channel() + self.falloff, self.reference_width())
            > self.config.full_border_threshold
    }

    /// Radii as fractions of half the shorter side, the form the codec packs.
    #[inline]
    pub fn normalized_radii(&self) -> [f32; 4] {
        let half_min = self.shorter_side() * 0.5;
        self.radii.map(|r| super::ratio(r, half_min))
    }

    /// The two transport words: `(TopLeft, TopRight)`, `(BottomLeft, BottomRight)`.
    #[inline]
    pub fn encoded_radii(&self) -> [EncodedPair; 2] {
        let [tl, tr, bl, br] = self.normalized_radii();
        [codec::encode(tl, tr), codec::encode(bl, br)]
    }

    /// Signed distance of a box-centered point.
    #[inline]
    pub fn distance(&self, p: Vec2) -> f32 {
        sdf::distance(p, self.half_size(), &self.radii)
    }

    /// Rendered coverage at a box-centered point.
    #[inline]
    pub fn coverage(&self, p: Vec2) -> f32 {
        coverage::dynamic_coverage(
            self.distance(p),
            self.falloff,
            self.border_channel(),
            self.reference_width(),
            self.config.full_border_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(w: f32, h: f32, r: f32, border: f32, mode: Mode) -> ShapeParameters {
        ShapeParameters::new(Vec2::new(w, h), &RadiusSet::all(r), border, 1.0, mode, ShapeConfig::default())
    }

    #[test]
    fn radii_scale_with_half_shorter_side() {
        let p = ShapeParameters::new(
            Vec2::new(100.0, 40.0),
            &RadiusSet::new(0.0, 0.5, 1.0, 0.25),
            0.0,
            1.0,
            Mode::Fill,
            ShapeConfig::default(),
        );
        assert_eq!(p.radii, [0.0, 10.0, 20.0, 5.0]);
        assert_eq!(p.normalized_radii(), [0.0, 0.5, 1.0, 0.25]);
    }

    #[test]
    fn out_of_range_inputs_are_clamped_before_encoding() {
        let p = ShapeParameters::new(
            Vec2::new(10.0, 10.0),
            &RadiusSet::new(-1.0, 2.0, f32::NAN, 0.5),
            3.0,
            -1.0,
            Mode::Border,
            ShapeConfig::default(),
        );
        assert_eq!(p.radii, [0.0, 5.0, 0.0, 2.5]);
        assert_eq!(p.border_width, p.reference_width());
        assert_eq!(p.falloff, 0.0);
    }

    #[test]
    fn border_maps_to_ring_parameter() {
        let p = params(100.0, 100.0, 0.2, 0.4, Mode::Border);
        assert_abs_diff_eq!(p.reference_width(), 25.0);
        assert_abs_diff_eq!(p.border_width, 10.0);
        assert_abs_diff_eq!(p.border_channel(), 10.0);
        assert!(!p.draws_filled());
    }

    #[test]
    fn fill_mode_transports_reference_width() {
        let p = params(100.0, 60.0, 0.2, 0.4, Mode::Fill);
        assert_abs_diff_eq!(p.border_channel(), 15.0);
        assert!(p.draws_filled());
        assert_abs_diff_eq!(p.coverage(Vec2::zero()), 1.0);
    }

    #[test]
    fn full_border_degrades_to_fill() {
        let p = params(100.0, 100.0, 0.2, 1.0, Mode::Border);
        assert!(p.draws_filled());
        assert_abs_diff_eq!(p.coverage(Vec2::zero()), 1.0);

        let thin = params(100.0, 100.0, 0.2, 0.2, Mode::Border);
        assert_abs_diff_eq!(thin.coverage(Vec2::zero()), 0.0);
    }

    #[test]
    fn encoded_radii_pair_order() {
        let p = ShapeParameters::new(
            Vec2::new(20.0, 20.0),
            &RadiusSet::new(1.0, 0.0, 0.0, 1.0),
            0.0,
            0.0,
            Mode::Fill,
            ShapeConfig::default(),
        );
        let [top, bottom] = p.encoded_radii();
        assert_eq!(top.levels(), (65535, 0));
        assert_eq!(bottom.levels(), (0, 65535));
    }

    #[test]
    fn zero_sized_box_stays_finite() {
        let p = params(0.0, 30.0, 0.5, 0.5, Mode::Border);
        assert_eq!(p.radii, [0.0; 4]);
        assert_eq!(p.normalized_radii(), [0.0; 4]);
        assert!(!p.draws_filled());
        for q in [Vec2::zero(), Vec2::new(3.0, -2.0), Vec2::new(-40.0, 0.0)] {
            assert!(p.distance(q).is_finite());
            let c = p.coverage(q);
            assert!(c.is_finite() && (0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn mode_names() {
        assert_eq!("Border".parse::<Mode>(), Ok(Mode::Border));
        assert_eq!(Mode::Fill.to_string(), "fill");
        assert!(matches!("outline".parse::<Mode>(), Err(ShapeError::UnknownMode(_))));
    }
}
