//! The 8-bit output format: 1 sign bit, 3 exponent bits, 4 fraction bits.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!
//! The layout of an [`Fp8`] is
//!
//! ```text
//!   bit:  7 | 6 5 4 | 3 2 1 0
//!         S |   E   |    F
//! ```
//!
//! Note that the exponent here is *not* a biased power of two in the IEEE sense: it is whatever
//! the converter hardware produces, namely a (truncated) leading zero count of the input
//! magnitude. See [`crate::convert`] for how the fields are derived.

/// An encoded 8-bit float, `sign << 7 | exp << 4 | frac`.
///
/// ```
/// # use minifloat_conv::{Fp8, Fields};
/// let x = Fp8::from_bits(0b1_011_0001);
/// assert_eq!(x.fields(), Fields::new(true, 3, 1).unwrap());
/// assert_eq!(format!("{x}"), "10110001");
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fp8(u8);

/// The decoded fields of an [`Fp8`].
///
/// Invariant: `exp < 1 << Fp8::EXP_BITS` and `frac < 1 << Fp8::FRAC_BITS`. The public
/// constructor [`Fields::new`] checks this; the converter only ever builds fields that already
/// satisfy it.
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct Fields {
  pub(crate) sign: bool,
  pub(crate) exp: u8,
  pub(crate) frac: u8,
}

/// Basics
mod basics;

/// Debug and binary formatting
mod fmt;
