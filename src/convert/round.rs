use super::*;

/// What the fraction becomes when rounding up carries out of it: `0b1000`.
const CARRY_FRAC: u8 = 1 << (Fp8::FRAC_BITS - 1);

/// Round half up on the round bit, returning the final `(exp, frac)`.
///
///   - Round bit 0: unchanged.
///   - Round bit 1, significand < `0b1111`: significand + 1.
///   - Round bit 1, significand = `0b1111`: significand becomes `0b1000` and the exponent goes up
///     by one, **saturating** at 7.
///
/// Contrast with [`exponent_of`], which wraps the exponent instead of saturating it. The two
/// overflow policies differ on purpose; they are what the converter hardware does.
///
/// ```
/// # use minifloat_conv::convert::{round_half_up, Extracted};
/// let up = Extracted { significand: 0b1111, round_bit: true };
/// assert_eq!(round_half_up(2, up), (3, 0b1000));
/// assert_eq!(round_half_up(7, up), (7, 0b1000));
/// ```
#[inline]
pub const fn round_half_up(exp: u8, extracted: Extracted) -> (u8, u8) {
  debug_assert!(exp <= Fp8::EXP_MAX && extracted.significand <= Fp8::FRAC_MAX);
  let Extracted { significand, round_bit } = extracted;
  if !round_bit {
    (exp, significand)
  } else if significand == Fp8::FRAC_MAX {
    let exp = if exp < Fp8::EXP_MAX { exp + 1 } else { Fp8::EXP_MAX };
    (exp, CARRY_FRAC)
  } else {
    (exp, significand + 1)
  }
}
