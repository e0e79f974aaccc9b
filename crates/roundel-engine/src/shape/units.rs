use std::fmt;
use std::str::FromStr;

use crate::ShapeError;

/// How radius and border inputs are expressed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RoundingUnit {
    /// Fraction of half the shorter side, already in `[0, 1]`.
    #[default]
    Percentage,
    /// Absolute length in logical pixels.
    World,
}

impl RoundingUnit {
    /// Converts a value in this unit into the normalized `[0, 1]` form.
    ///
    /// World lengths larger than half the shorter side saturate at `1`.
    /// A zero-sized box maps every world length to `0`.
    #[inline]
    pub fn to_normalized(self, value: f32, shorter_side: f32) -> f32 {
        match self {
            RoundingUnit::Percentage => value,
            RoundingUnit::World => super::clamp01(super::ratio(value * 2.0, shorter_side)),
        }
    }

    /// Converts a normalized value back into this unit.
    #[inline]
    pub fn from_normalized(self, normalized: f32, shorter_side: f32) -> f32 {
        match self {
            RoundingUnit::Percentage => normalized,
            RoundingUnit::World => normalized * shorter_side.max(0.0) * 0.5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RoundingUnit::Percentage => "percentage",
            RoundingUnit::World => "world",
        }
    }
}

impl fmt::Display for RoundingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingUnit {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" | "%" => Ok(RoundingUnit::Percentage),
            "world" | "px" => Ok(RoundingUnit::World),
            _ => Err(ShapeError::UnknownUnit(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for RoundingUnit {
    type Error = ShapeError;

    /// Serialized discriminant (`0` percentage, `1` world).
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(RoundingUnit::Percentage),
            1 => Ok(RoundingUnit::World),
            other => Err(ShapeError::UnknownUnit(other.to_string())),
        }
    }
}
