use super::*;

use core::fmt::{self, Binary, Debug, Display};

impl Binary for Fp8 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Binary::fmt(&self.0, f)
  }
}

/// Always exactly 8 binary digits, zero-padded, msb first (`sign|exp|frac`).
impl Display for Fp8 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:08b}", self.0)
  }
}

impl Debug for Fp8 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Fields { sign, exp, frac } = self.fields();
    f.debug_tuple("Fp8")
      .field(&format_args!("0b{:b}_{exp:03b}_{frac:04b}", sign as u8))
      .finish()
  }
}

impl Debug for Fields {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Fields")
      .field("sign", &(self.sign as u8))
      .field("exp", &format_args!("0b{:03b}", self.exp))
      .field("frac", &format_args!("0b{:04b}", self.frac))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(format!("{}", Fp8::ZERO), "00000000");
    assert_eq!(format!("{}", Fp8::from_bits(0b00110001)), "00110001");
    assert_eq!(format!("{}", Fp8::from_bits(0xff)), "11111111");
  }

  #[test]
  fn binary() {
    assert_eq!(format!("{:b}", Fp8::from_bits(0b101)), "101");
    assert_eq!(format!("{:#010b}", Fp8::from_bits(0b101)), "0b00000101");
  }

  #[test]
  fn debug() {
    assert_eq!(format!("{:?}", Fp8::from_bits(0b1_011_0001)), "Fp8(0b1_011_0001)");
    assert_eq!(
      format!("{:?}", Fields::new(false, 7, 8).unwrap()),
      "Fields { sign: 0, exp: 0b111, frac: 0b1000 }",
    );
  }
}
