use super::*;

/// A 12-bit word split into a sign bit and an unsigned magnitude.
///
/// Invariant: `magnitude <= 0x800`. The one value that reaches `0x800` is [`Word12::MIN`] (=
/// -2048), whose absolute value needs the sign bit position; every other magnitude fits in 11
/// bits.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub struct SignMagnitude {
  pub sign: bool,
  pub magnitude: u16,
}

/// Decode a two's complement word into sign and magnitude.
///
/// The sign is bit 11. Negative words are negated in two's complement (`!d + 1`) and masked back
/// to 12 bits, so that -2048 comes out as `sign = true, magnitude = 0x800`.
///
/// ```
/// # use minifloat_conv::{Word12, convert::sign_magnitude};
/// let sm = sign_magnitude(Word12::from_signed(-5).unwrap());
/// assert!(sm.sign);
/// assert_eq!(sm.magnitude, 5);
/// ```
#[inline]
pub const fn sign_magnitude(word: Word12) -> SignMagnitude {
  let d = word.to_bits();
  let sign = word.sign_bit();
  let magnitude =
    if sign {
      (!d).wrapping_add(1) & Word12::MASK
    } else {
      d
    };
  SignMagnitude { sign, magnitude }
}
