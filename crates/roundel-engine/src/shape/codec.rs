//! Fixed-point packing of two normalized scalars into one `f32` channel.
//!
//! Wire layout of the 32-bit word:
//!
//! ```text
//!  31            16 15             0
//! ┌────────────────┬────────────────┐
//! │ second * 65535 │ first  * 65535 │
//! └────────────────┴────────────────┘
//! ```
//!
//! The word travels as the *bits* of an `f32` vertex attribute. Some words
//! (e.g. `second == 1.0`) are NaN patterns when read as a float, so the value
//! must only ever be copied (bytemuck) and reinterpreted, never used in float
//! arithmetic. The shader side reads it back with `bitcast<u32>`.

/// Number of quantization steps per value (16 bits).
pub const LEVELS: f32 = 65535.0;

/// Two normalized scalars packed into one transport word.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct EncodedPair(pub u32);

impl EncodedPair {
    /// Packs two already quantized levels.
    #[inline]
    pub const fn from_levels(first: u16, second: u16) -> Self {
        Self((first as u32) | ((second as u32) << 16))
    }

    /// Quantized levels `(first, second)`.
    #[inline]
    pub const fn levels(self) -> (u16, u16) {
        ((self.0 & 0xFFFF) as u16, (self.0 >> 16) as u16)
    }

    /// Bit-reinterprets the word as a float channel value.
    #[inline]
    pub fn to_channel(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Inverse of [`to_channel`](Self::to_channel).
    #[inline]
    pub fn from_channel(channel: f32) -> Self {
        Self(channel.to_bits())
    }
}

#[inline]
fn quantize(v: f32) -> u16 {
    // Truncation, not rounding. Input is already in [0, 1].
    (super::clamp01(v) * LEVELS) as u16
}

/// Packs `(a, b)`, each clamped to `[0, 1]`, into one transport word.
#[inline]
pub fn encode(a: f32, b: f32) -> EncodedPair {
    EncodedPair::from_levels(quantize(a), quantize(b))
}

/// Packs raw 16-bit levels.
#[inline]
pub fn encode_raw(x: u16, y: u16) -> EncodedPair {
    EncodedPair::from_levels(x, y)
}

/// Unpacks a word back into `(a, b)` in `[0, 1]`.
#[inline]
pub fn decode(pair: EncodedPair) -> (f32, f32) {
    let (lo, hi) = pair.levels();
    (lo as f32 / LEVELS, hi as f32 / LEVELS)
}
