//! The 12-bit two's complement input word.

use core::fmt;

use crate::error::{self, Error};

/// A 12-bit two's complement word, held in the low 12 bits of a `u16`. The upper 4 bits are
/// always 0.
///
/// ```
/// # use minifloat_conv::Word12;
/// let w = Word12::from_signed(-1).unwrap();
/// assert_eq!(w.to_bits(), 0xfff);
/// assert_eq!(format!("{w}"), "111111111111");
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]  // Ordered by raw bits, not by signed value
pub struct Word12(u16);

impl Word12 {
  /// Width of the word.
  pub const BITS: u32 = 12;

  /// Mask of the meaningful bits.
  pub const MASK: u16 = (1 << Self::BITS) - 1;

  /// Position of the sign bit (the msb).
  pub const SIGN_BIT: u32 = Self::BITS - 1;

  pub const ZERO: Self = Self(0);

  /// Most negative value, `0b1000_0000_0000` (= -2048).
  pub const MIN: Self = Self(1 << Self::SIGN_BIT);

  /// Most positive value, `0b0111_1111_1111` (= 2047).
  pub const MAX: Self = Self(Self::MASK >> 1);

  /// Construct a word from raw bits, failing if any bit above bit 11 is set.
  pub const fn new(bits: u16) -> error::Result<Self> {
    if bits & !Self::MASK != 0 {
      Err(Error::WordOutOfRange(bits))
    } else {
      Ok(Self(bits))
    }
  }

  /// Construct a word from raw bits, discarding everything above bit 11.
  #[inline]
  pub const fn from_bits_truncate(bits: u16) -> Self {
    Self(bits & Self::MASK)
  }

  /// Construct a word from its signed value, failing outside `-2048 ..= 2047`.
  pub fn from_signed(value: i16) -> error::Result<Self> {
    if value < Self::MIN.to_signed() || value > Self::MAX.to_signed() {
      return Err(Error::SignedOutOfRange(value.into()))
    }
    Ok(Self::from_bits_truncate(value as u16))
  }

  /// The raw bits, in `0 ..= 0xfff`.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    self.0
  }

  /// The value of the word interpreted as two's complement, in `-2048 ..= 2047`.
  #[inline]
  pub const fn to_signed(self) -> i16 {
    // Move the sign bit into the msb of an i16, then arithmetic shift back.
    ((self.0 << (16 - Self::BITS)) as i16) >> (16 - Self::BITS)
  }

  /// Bit 11.
  #[inline]
  pub const fn sign_bit(self) -> bool {
    self.0 >> Self::SIGN_BIT != 0
  }

  /// Every word, in ascending order of raw bits (so `0`, `1`, .. `2047`, `-2048`, .. `-1`).
  pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
    (0 ..= Self::MASK).map(Self)
  }
}

impl TryFrom<u16> for Word12 {
  type Error = Error;

  fn try_from(bits: u16) -> error::Result<Self> {
    Self::new(bits)
  }
}

impl TryFrom<i16> for Word12 {
  type Error = Error;

  fn try_from(value: i16) -> error::Result<Self> {
    Self::from_signed(value)
  }
}

impl TryFrom<i32> for Word12 {
  type Error = Error;

  fn try_from(value: i32) -> error::Result<Self> {
    i16::try_from(value)
      .map_err(|_| Error::SignedOutOfRange(value))
      .and_then(Self::from_signed)
  }
}

impl fmt::Binary for Word12 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Binary::fmt(&self.0, f)
  }
}

/// Always exactly 12 binary digits, zero-padded.
impl fmt::Display for Word12 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:012b}", self.0)
  }
}

impl fmt::Debug for Word12 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Word12")
      .field(&format_args!("0b{:012b} ({:+})", self.0, self.to_signed()))
      .finish()
  }
}
