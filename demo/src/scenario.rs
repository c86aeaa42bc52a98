use std::io::{self, Write};

use tracing::debug;

use presence_core::{branch_on_presence, run_if_absent, run_if_present};

use crate::config::Config;

/// Runs each scenario against `config`, writing one line per scenario that produces output.
pub fn run_all(config: &Config, out: &mut impl Write) -> Result<(), io::Error> {
  print_doubled(config.number, out)?;
  print_empty(config.number, out)?;
  let length = text_length(config.text.as_deref());
  writeln!(out, "{}", length)?;
  Ok(())
}

/// Writes `number * 2` if there is a number.
pub fn print_doubled(number: Option<i64>, out: &mut impl Write) -> Result<(), io::Error> {
  let mut result = Ok(());
  run_if_present(number, |n| {
    debug!(n, "number is present");
    result = writeln!(out, "{}", n.saturating_mul(2));
  });
  result
}

/// Writes `empty` if there is no number.
pub fn print_empty(number: Option<i64>, out: &mut impl Write) -> Result<(), io::Error> {
  let mut result = Ok(());
  run_if_absent(number, || {
    debug!("number is absent");
    result = writeln!(out, "empty");
  });
  result
}

/// Number of characters in `text`, or `-1` if there is no text.
pub fn text_length(text: Option<&str>) -> i64 {
  branch_on_presence(text, |s| s.chars().count() as i64).otherwise(|| -1)
}
