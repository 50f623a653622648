//! `fp8conv`: print and save the 12-bit → 8-bit float conversion table.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use minifloat_conv::report::{self, DEFAULT_RESULTS_PATH, Line, Summary};

const RULE: &str =
  "================================================================================";

/// Convert 12-bit two's complement integers to 8-bit floats (1 sign, 3 exponent, 4 fraction bits)
#[derive(Parser, Debug)]
#[command(name = "fp8conv")]
#[command(version)]
#[command(long_about = r#"
Converts every 12-bit two's complement input (-2048 to 2047) to the 8-bit
sign|exponent|fraction format, bit-exactly as the converter hardware does,
and prints one line per input:

  Input (2's Comp): 000000000001 | Output (FP): 00110001

Then prints a summary and a list of edge cases, and saves the full table.

Example usage:
  fp8conv
  fp8conv --quiet --output table.txt
  fp8conv --value -2048 --value 31
"#)]
struct Cli {
  /// Results file for the full sweep
  #[arg(short, long, default_value = DEFAULT_RESULTS_PATH)]
  output: PathBuf,

  /// Don't write the results file
  #[arg(long)]
  no_save: bool,

  /// Don't print the individual lines of the full sweep
  #[arg(short, long)]
  quiet: bool,

  /// Convert only these signed values (-2048..=2047) instead of the full sweep
  #[arg(long = "value", allow_negative_numbers = true)]
  values: Vec<i32>,

  /// Increase log verbosity (-v info, -vv debug)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => "warn",
    1 => "info",
    _ => "debug",
  };
  env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
  if !cli.values.is_empty() {
    for line in report::lines_for(&cli.values)? {
      println!("{line}");
    }
    return Ok(())
  }

  println!("Testing full range of 12-bit two's complement numbers...");
  println!("{RULE}");
  let lines: Vec<Line> = report::sweep().collect();
  log::info!("converted {} inputs", lines.len());
  if !cli.quiet {
    for line in &lines {
      println!("{line}");
    }
  }
  println!("{RULE}");
  println!();
  println!("{}", Summary::of(&lines));

  println!();
  println!("{RULE}");
  println!("Testing specific edge cases:");
  println!("{RULE}");
  for line in report::edge_cases() {
    println!("{line}");
  }

  if !cli.no_save {
    println!();
    println!("{RULE}");
    println!("Saving results to '{}'...", cli.output.display());
    report::write_results(&cli.output, &lines)
      .with_context(|| format!("saving the sweep of {} lines", lines.len()))?;
    println!("Results saved!");
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  use clap::CommandFactory;

  #[test]
  fn cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn defaults() {
    let cli = Cli::try_parse_from(["fp8conv"]).unwrap();
    assert_eq!(cli.output, PathBuf::from(DEFAULT_RESULTS_PATH));
    assert!(!cli.no_save && !cli.quiet && cli.values.is_empty());
    assert_eq!(cli.verbose, 0);
  }

  #[test]
  fn negative_values() {
    let cli = Cli::try_parse_from(["fp8conv", "--value", "-2048", "--value", "31", "-vv"]).unwrap();
    assert_eq!(cli.values, [-2048, 31]);
    assert_eq!(cli.verbose, 2);
  }

  #[test]
  fn run_saves_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("table.txt");
    let cli = Cli::try_parse_from([
      "fp8conv", "--quiet", "--output", output.to_str().unwrap(),
    ]).unwrap();
    run(&cli).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 4096);
    assert_eq!(
      written.lines().next(),
      Some("Input (2's Comp): 000000000000 | Output (FP): 00000000"),
    );
  }

  #[test]
  fn run_rejects_out_of_range() {
    let cli = Cli::try_parse_from(["fp8conv", "--value", "2048"]).unwrap();
    assert!(run(&cli).is_err());
  }
}
