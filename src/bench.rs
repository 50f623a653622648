//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::convert;
use crate::{Fields, Fp8, Word12};

impl Fields {
  pub fn bench_new_unchecked(sign: bool, exp: u8, frac: u8) -> Self {
    Self::new_unchecked(sign, exp, frac)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn convert_word(word: Word12) -> Fp8 {
  word.to_fp8()
}

#[unsafe(no_mangle)]
pub fn sign_magnitude(word: Word12) -> convert::SignMagnitude {
  convert::sign_magnitude(word)
}

#[unsafe(no_mangle)]
pub fn exponent_of(magnitude: u16) -> u8 {
  convert::exponent_of(magnitude)
}

#[unsafe(no_mangle)]
pub fn extract_significand(magnitude: u16) -> convert::Extracted {
  convert::extract_significand(magnitude)
}

#[unsafe(no_mangle)]
pub fn round_half_up(exp: u8, extracted: convert::Extracted) -> (u8, u8) {
  convert::round_half_up(exp, extracted)
}

#[unsafe(no_mangle)]
pub fn pack(fields: Fields) -> Fp8 {
  fields.pack()
}
