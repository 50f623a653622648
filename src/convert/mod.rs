//! The conversion pipeline from a 12-bit two's complement [`Word12`] to an 8-bit [`Fp8`].
//!
//! Each stage is a small `const fn` on fixed-width integers, public so that a hardware trace can
//! be compared stage by stage and not only on the final output:
//!
//!   1. [`sign_magnitude`]: split off the sign and take the absolute value.
//!   2. [`exponent_of`]: leading zero count of the magnitude, truncated to 3 bits.
//!   3. [`extract_significand`]: the 4-bit window starting at the leading one, plus a round bit.
//!   4. [`round_half_up`]: round on that bit, carrying into the exponent and saturating it.
//!   5. [`Fields::pack`]: assemble `sign|exp|frac`.
//!
//! Zero short-circuits the whole thing: an input of 0 gives all-zero fields.
//!
//! The behaviour here has a couple of quirks that are deliberate, since the point is to match
//! the hardware bit for bit:
//!
//!   - The exponent wraps (mod 8) when computed, but saturates (at 7) when rounding carries into
//!     it.
//!   - -2048 converts to `0b1_000_0000`; its magnitude `0x800` has the leading one at bit 11, so
//!     its exponent is 0, but the significand scan starts at bit 10 and so only sees zeros.

use crate::error;
use crate::fp8::{Fields, Fp8};
use crate::word::Word12;

mod sign_magnitude;
mod leading_zero;
mod significand;
mod round;

pub use sign_magnitude::{SignMagnitude, sign_magnitude};
pub use leading_zero::{leading_one, exponent_of};
pub use significand::{Extracted, extract_significand, WINDOW_BITS, WINDOW_TOP};
pub use round::round_half_up;

/// Convert a 12-bit two's complement word into the sign, exponent and fraction of an 8-bit float.
///
/// This is total over all 4096 words and never fails.
///
/// ```
/// # use minifloat_conv::{Word12, convert::convert};
/// let fields = convert(Word12::from_signed(100).unwrap());
/// assert_eq!((fields.sign(), fields.exp(), fields.frac()), (false, 5, 0b1101));
/// ```
pub const fn convert(word: Word12) -> Fields {
  let SignMagnitude { sign, magnitude } = sign_magnitude(word);
  if magnitude == 0 {
    return Fields::ZERO
  }
  let exp = exponent_of(magnitude);
  let extracted = extract_significand(magnitude);
  let (exp, frac) = round_half_up(exp, extracted);
  Fields::new_unchecked(sign, exp, frac)
}

/// As [`convert`], but taking raw bits, which must fit in 12 bits.
pub fn convert_bits(bits: u16) -> error::Result<Fields> {
  Ok(convert(Word12::new(bits)?))
}

impl Word12 {
  /// Convert `self`; see [`convert`].
  #[inline]
  pub const fn to_fields(self) -> Fields {
    convert(self)
  }

  /// Convert and pack `self`; see [`convert`].
  #[inline]
  pub const fn to_fp8(self) -> Fp8 {
    convert(self).pack()
  }
}

impl From<Word12> for Fp8 {
  fn from(word: Word12) -> Self {
    word.to_fp8()
  }
}

impl From<Word12> for Fields {
  fn from(word: Word12) -> Self {
    convert(word)
  }
}
