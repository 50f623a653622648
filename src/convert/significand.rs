use super::*;

/// Width of the significand window (= the fraction field).
pub const WINDOW_BITS: u32 = Fp8::FRAC_BITS;

/// Highest bit the window can be anchored at. The extractor scans from bit 10 down, since a
/// magnitude is assumed to have bit 11 clear; see [`extract_significand`] for what happens with
/// the one magnitude that does not.
pub const WINDOW_TOP: u32 = Word12::SIGN_BIT - 1;

/// Output of [`extract_significand`].
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub struct Extracted {
  /// 4 bits, `0 ..= 15`.
  pub significand: u8,
  /// The bit just below the window.
  pub round_bit: bool,
}

/// Take the 4-bit window whose top bit is the leading one of `magnitude`, plus the round bit just
/// below it.
///
/// Let `i` be the leading one among bits 10..0:
///
///   - If `i >= 4`: the window is bits `i ..= i-3` and the round bit is bit `i-4`.
///   - If `i <= 3`, or there is no one among bits 10..0: the window is just bits `3 ..= 0`, and
///     there is no round bit (0).
///
/// Examples:
///
/// ```text
///   magnitude:   0b0000_1011_0110
///           i:   7
///      window:          ^^^^
/// significand:   0b1011
///  round_bit :   0 (bit 3)
///
///   magnitude:   0b0000_0000_0110
///           i:   2
/// significand:   0b0110
///  round_bit :   0
/// ```
///
/// Because the scan starts at bit 10, the magnitude `0x800` (from an input of -2048) finds no
/// leading one and falls through to the low-bits case: significand `0b0000`, round bit 0.
#[inline]
pub const fn extract_significand(magnitude: u16) -> Extracted {
  debug_assert!(magnitude <= Word12::MASK);
  let scanned = magnitude & ((1 << (WINDOW_TOP + 1)) - 1);
  match leading_one(scanned) {
    Some(i) if i >= WINDOW_BITS => {
      let significand = (magnitude >> (i - (WINDOW_BITS - 1))) as u8 & Fp8::FRAC_MAX;
      let round_bit = (magnitude >> (i - WINDOW_BITS)) & 1 != 0;
      Extracted { significand, round_bit }
    },
    _ => Extracted {
      significand: magnitude as u8 & Fp8::FRAC_MAX,
      round_bit: false,
    },
  }
}
