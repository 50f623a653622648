use super::*;

/// Number of bits by which a 12-bit value sits below the top of its `u16` container.
const PAD: u32 = u16::BITS - Word12::BITS;

/// Position of the most significant set bit of `magnitude` (bit 11 down to bit 0), or `None` if
/// `magnitude` is 0.
///
/// `magnitude` must fit in 12 bits.
///
/// ```
/// # use minifloat_conv::convert::leading_one;
/// assert_eq!(leading_one(0b0000_0010_1100), Some(5));
/// assert_eq!(leading_one(0), None);
/// ```
#[inline]
pub const fn leading_one(magnitude: u16) -> Option<u32> {
  debug_assert!(magnitude <= Word12::MASK);
  if magnitude == 0 {
    None
  } else {
    Some(u16::BITS - 1 - magnitude.leading_zeros())
  }
}

/// The 3-bit exponent of `magnitude`: its leading zero count as a 12-bit number (`11 - i`, where
/// `i` is the position of the leading one), *truncated* to the low 3 bits.
///
/// Truncation, not saturation: magnitudes whose leading one is at bit 3 or below have a raw count
/// of 8..=11, which wraps around to 0..=3. A magnitude of 0 has exponent 0.
///
/// ```
/// # use minifloat_conv::convert::exponent_of;
/// assert_eq!(exponent_of(0b0100_0000_0000), 1);  // raw 1
/// assert_eq!(exponent_of(0b0000_0001_0000), 7);  // raw 7
/// assert_eq!(exponent_of(0b0000_0000_0001), 3);  // raw 11, wraps
/// ```
#[inline]
pub const fn exponent_of(magnitude: u16) -> u8 {
  debug_assert!(magnitude <= Word12::MASK);
  if magnitude == 0 {
    return 0
  }
  let raw = magnitude.leading_zeros() - PAD;
  (raw as u8) & Fp8::EXP_MAX
}
