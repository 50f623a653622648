use super::*;
use crate::error::{self, Error};

impl Fp8 {
  /// Total width in bits.
  pub const BITS: u32 = 8;

  /// Width of the exponent field.
  pub const EXP_BITS: u32 = 3;

  /// Width of the fraction field.
  pub const FRAC_BITS: u32 = 4;

  /// Largest value the exponent field can hold.
  pub const EXP_MAX: u8 = (1 << Self::EXP_BITS) - 1;

  /// Largest value the fraction field can hold.
  pub const FRAC_MAX: u8 = (1 << Self::FRAC_BITS) - 1;

  pub(crate) const SIGN_SHIFT: u32 = Self::EXP_BITS + Self::FRAC_BITS;
  pub(crate) const EXP_SHIFT: u32 = Self::FRAC_BITS;

  /// Zero. There is no negative zero: the converter never emits `0b1000_0000` for an input of 0
  /// (though it does for -2048, see [`crate::convert`]).
  pub const ZERO: Self = Self(0);

  /// Construct from the raw bit representation. Every bit pattern is valid.
  #[inline]
  pub const fn from_bits(bits: u8) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation.
  #[inline]
  pub const fn to_bits(self) -> u8 {
    self.0
  }

  /// Bit 7.
  #[inline]
  pub const fn sign(self) -> bool {
    self.0 >> Self::SIGN_SHIFT != 0
  }

  /// Bits 6..4.
  #[inline]
  pub const fn exp(self) -> u8 {
    (self.0 >> Self::EXP_SHIFT) & Self::EXP_MAX
  }

  /// Bits 3..0.
  #[inline]
  pub const fn frac(self) -> u8 {
    self.0 & Self::FRAC_MAX
  }

  /// Split into sign, exponent and fraction.
  #[inline]
  pub const fn fields(self) -> Fields {
    Fields { sign: self.sign(), exp: self.exp(), frac: self.frac() }
  }
}

impl Fields {
  /// The all-zero fields, what an input of 0 converts to.
  pub const ZERO: Self = Self { sign: false, exp: 0, frac: 0 };

  /// Construct from the individual fields, checking that `exp` and `frac` fit in their widths.
  pub fn new(sign: bool, exp: u8, frac: u8) -> error::Result<Self> {
    if exp > Fp8::EXP_MAX {
      return Err(Error::FieldOutOfRange { field: "exponent", value: exp, bits: Fp8::EXP_BITS })
    }
    if frac > Fp8::FRAC_MAX {
      return Err(Error::FieldOutOfRange { field: "fraction", value: frac, bits: Fp8::FRAC_BITS })
    }
    Ok(Self { sign, exp, frac })
  }

  /// As [`Self::new`], but does not check the field widths.
  ///
  /// The caller must guarantee `exp <= Fp8::EXP_MAX` and `frac <= Fp8::FRAC_MAX`; otherwise the
  /// surplus bits bleed into neighbouring fields when packed.
  #[inline]
  pub(crate) const fn new_unchecked(sign: bool, exp: u8, frac: u8) -> Self {
    debug_assert!(exp <= Fp8::EXP_MAX && frac <= Fp8::FRAC_MAX);
    Self { sign, exp, frac }
  }

  #[inline]
  pub const fn sign(self) -> bool {
    self.sign
  }

  #[inline]
  pub const fn exp(self) -> u8 {
    self.exp
  }

  #[inline]
  pub const fn frac(self) -> u8 {
    self.frac
  }

  /// Pack into `sign << 7 | exp << 4 | frac`.
  #[inline]
  pub const fn pack(self) -> Fp8 {
    Fp8(
      (self.sign as u8) << Fp8::SIGN_SHIFT
      | self.exp << Fp8::EXP_SHIFT
      | self.frac
    )
  }
}

impl From<Fields> for Fp8 {
  fn from(fields: Fields) -> Self {
    fields.pack()
  }
}

impl From<Fp8> for Fields {
  fn from(x: Fp8) -> Self {
    x.fields()
  }
}
