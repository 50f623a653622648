//! A bit-exact software model of a hardware converter from 12-bit two's complement integers to an
//! 8-bit floating point format with 1 sign bit, 3 exponent bits, and 4 fraction bits.
//!
//! # Introduction
//!
//! The converter is a short pipeline of bit manipulations: sign/magnitude split, leading zero
//! count, significand extraction, and round half up. This crate reproduces it exactly, quirks
//! included, so that its output can be compared against a hardware (RTL) implementation for every
//! one of the 4096 possible inputs. See the [`convert`] module for the details of each stage.
//!
//! # Usage
//!
//! ```
//! use minifloat_conv::{Word12, Fp8, report};
//!
//! // Convert a single value.
//! let x: Fp8 = Word12::from_signed(-1).unwrap().into();
//! assert_eq!(x.to_string(), "10110001");
//! assert_eq!((x.sign(), x.exp(), x.frac()), (true, 3, 1));
//!
//! // Or the whole input range, as text.
//! let lines: Vec<_> = report::sweep().collect();
//! assert_eq!(lines.len(), 4096);
//! assert_eq!(
//!   lines[1].to_string(),
//!   "Input (2's Comp): 000000000001 | Output (FP): 00110001",
//! );
//! ```
//!
//! The `fp8conv` binary prints the full sweep and the edge cases, and writes the sweep to a
//! results file; run it with `--help` for the options.
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

pub mod convert;
pub mod error;
pub mod report;

mod fp8;
mod word;

pub use convert::convert;
pub use error::{Error, Result};
pub use fp8::{Fields, Fp8};
pub use word::Word12;

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
pub mod bench;
