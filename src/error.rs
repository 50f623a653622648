//! Error type shared by the whole crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  /// Raw bits had something set above bit 11.
  #[error("value {0:#06x} does not fit in a 12-bit word")]
  WordOutOfRange(u16),

  #[error("value {0} is outside the 12-bit two's complement range -2048..=2047")]
  SignedOutOfRange(i32),

  #[error("{field} value {value} does not fit in {bits} bits")]
  FieldOutOfRange { field: &'static str, value: u8, bits: u32 },

  #[error("failed to write results to {}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
