//! Text report of conversions: the full-range sweep, the edge cases, and the results file.
//!
//! Every line has the form
//!
//! ```text
//! Input (2's Comp): 000000000001 | Output (FP): 00110001
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::fp8::Fp8;
use crate::word::Word12;

/// Signed inputs worth looking at individually, in the order they are reported.
pub const EDGE_CASES: [i16; 11] = [
  0,      // zero
  1,      // smallest positive
  -1,     // smallest negative
  2047,   // largest positive
  -2048,  // largest negative, magnitude needs bit 11
  1024,
  -1024,
  512,
  -512,
  256,
  -256,
];

/// Default name of the results file.
pub const DEFAULT_RESULTS_PATH: &str = "conversion_results.txt";

/// One input and its conversion.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub struct Line {
  pub input: Word12,
  pub output: Fp8,
}

impl Line {
  pub const fn new(input: Word12) -> Self {
    Self { input, output: input.to_fp8() }
  }
}

impl fmt::Display for Line {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Input (2's Comp): {} | Output (FP): {}", self.input, self.output)
  }
}

/// Every input, in ascending order of raw bits: 4096 lines, from 0 to 4095 (= -1).
pub fn sweep() -> impl DoubleEndedIterator<Item = Line> + ExactSizeIterator {
  Word12::all().map(Line::new)
}

/// The lines for [`EDGE_CASES`].
pub fn edge_cases() -> impl Iterator<Item = Line> {
  // All EDGE_CASES are within range
  EDGE_CASES.into_iter().map(|v| Line::new(Word12::from_bits_truncate(v as u16)))
}

/// Lines for arbitrary signed inputs, failing on the first one out of range.
pub fn lines_for(values: &[i32]) -> Result<Vec<Line>> {
  values.iter()
    .map(|&v| Word12::try_from(v).map(Line::new))
    .collect()
}

/// Statistics over a run of lines.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub struct Summary {
  /// Number of lines.
  pub total: usize,
  /// Signed value of the first and last inputs, if any.
  pub range: Option<(i16, i16)>,
  /// Number of distinct outputs.
  pub unique: usize,
}

impl Summary {
  pub fn of<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
    let mut total = 0;
    let mut first = None;
    let mut last = None;
    let mut outputs = HashSet::new();
    for line in lines {
      total += 1;
      let value = line.input.to_signed();
      first.get_or_insert(value);
      last = Some(value);
      outputs.insert(line.output);
    }
    Self {
      total,
      range: first.zip(last),
      unique: outputs.len(),
    }
  }
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Total values tested: {}", self.total)?;
    match self.range {
      Some((first, last)) => writeln!(f, "Range: {first} to {last}")?,
      None => writeln!(f, "Range: (empty)")?,
    }
    write!(f, "Unique floating point values: {}", self.unique)
  }
}

/// Write `lines` to `out`, one per line, in order.
pub fn write_lines<'a, W: Write>(
  mut out: W,
  lines: impl IntoIterator<Item = &'a Line>,
) -> std::io::Result<usize> {
  let mut count = 0;
  for line in lines {
    writeln!(out, "{line}")?;
    count += 1;
  }
  out.flush()?;
  Ok(count)
}

/// Write `lines` to the file at `path`, creating or truncating it.
pub fn write_results<'a>(
  path: impl AsRef<Path>,
  lines: impl IntoIterator<Item = &'a Line>,
) -> Result<usize> {
  let path = path.as_ref();
  let wrap = |source| Error::Write { path: path.to_owned(), source };
  log::debug!("writing results to {}", path.display());
  let file = File::create(path).map_err(wrap)?;
  let count = write_lines(BufWriter::new(file), lines).map_err(wrap)?;
  log::info!("wrote {count} lines to {}", path.display());
  Ok(count)
}

#[cfg(test)]
mod tests {
  use super::*;

  use pretty_assertions::assert_eq;

  fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
  }

  #[test]
  fn line_format() {
    assert_eq!(
      Line::new(Word12::from_bits_truncate(1)).to_string(),
      "Input (2's Comp): 000000000001 | Output (FP): 00110001",
    );
    assert_eq!(
      Line::new(Word12::MIN).to_string(),
      "Input (2's Comp): 100000000000 | Output (FP): 10000000",
    );
  }

  #[test]
  fn sweep_order() {
    let lines: Vec<_> = sweep().collect();
    assert_eq!(lines.len(), 4096);
    assert_eq!(lines[0].input.to_bits(), 0);
    assert_eq!(lines[4095].input.to_bits(), 4095);
    assert_eq!(lines[0].to_string(), "Input (2's Comp): 000000000000 | Output (FP): 00000000");
    assert_eq!(lines[4095].to_string(), "Input (2's Comp): 111111111111 | Output (FP): 10110001");
  }

  #[test]
  fn sweep_summary() {
    let lines: Vec<_> = sweep().collect();
    let summary = Summary::of(&lines);
    assert_eq!(summary, Summary { total: 4096, range: Some((0, -1)), unique: 144 });
    assert_eq!(
      summary.to_string(),
      "Total values tested: 4096\nRange: 0 to -1\nUnique floating point values: 144",
    );
  }

  #[test]
  fn empty_summary() {
    assert_eq!(Summary::of(&[] as &[Line]), Summary { total: 0, range: None, unique: 0 });
  }

  #[test]
  fn edge_case_lines() {
    let text: Vec<String> = edge_cases().map(|l| l.to_string()).collect();
    assert_eq!(text, [
      "Input (2's Comp): 000000000000 | Output (FP): 00000000",
      "Input (2's Comp): 000000000001 | Output (FP): 00110001",
      "Input (2's Comp): 111111111111 | Output (FP): 10110001",
      "Input (2's Comp): 011111111111 | Output (FP): 00101000",
      "Input (2's Comp): 100000000000 | Output (FP): 10000000",
      "Input (2's Comp): 010000000000 | Output (FP): 00011000",
      "Input (2's Comp): 110000000000 | Output (FP): 10011000",
      "Input (2's Comp): 001000000000 | Output (FP): 00101000",
      "Input (2's Comp): 111000000000 | Output (FP): 10101000",
      "Input (2's Comp): 000100000000 | Output (FP): 00111000",
      "Input (2's Comp): 111100000000 | Output (FP): 10111000",
    ]);
  }

  #[test]
  fn lines_for_values() {
    let lines = lines_for(&[-1, 100]).unwrap();
    assert_eq!(lines[0].input.to_bits(), 0xfff);
    assert_eq!(lines[1].output.to_bits(), 0b0_101_1101);
    assert!(matches!(lines_for(&[5, 4096]), Err(Error::SignedOutOfRange(4096))));
  }

  #[test]
  fn results_file_matches_sweep() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_RESULTS_PATH);
    let lines: Vec<_> = sweep().collect();

    let count = write_results(&path, &lines).unwrap();
    assert_eq!(count, 4096);

    let written = std::fs::read_to_string(&path).unwrap();
    let expected: String = lines.iter().map(|l| format!("{l}\n")).collect();
    assert_eq!(written, expected);
    assert_eq!(written.lines().count(), 4096);
  }

  #[test]
  fn results_file_error() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let err = write_results(&path, &[] as &[Line]).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
    assert!(err.to_string().contains("out.txt"));
  }
}
