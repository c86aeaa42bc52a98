use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use presence_core::app::env::{self, EnvError};

#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct Config {
  pub number: Option<i64>,
  pub text: Option<String>,
  pub log_file_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("unknown argument '{0}'")]
  UnknownArgument(String),
  #[error("argument '{0}' requires a value")]
  MissingValue(&'static str),
  #[error("'{value}' is not a valid number")]
  InvalidNumber { value: String, #[source] cause: ParseIntError },
  #[error(transparent)]
  Env(#[from] EnvError),
}

impl Config {
  /// Creates configuration from command-line `args` (without the program name), falling back to the
  /// `PRESENCE_NUMBER`, `PRESENCE_TEXT`, and `LOG_FILE` environment variables for anything not given as an argument.
  pub fn from_args_and_env(args: impl IntoIterator<Item=String>) -> Result<Self, ConfigError> {
    let from_args = Self::from_args(args)?;
    let number = match from_args.number {
      Some(number) => Some(number),
      None => env::var("PRESENCE_NUMBER")?.map(parse_number).transpose()?,
    };
    let text = match from_args.text {
      Some(text) => Some(text),
      None => env::var("PRESENCE_TEXT")?,
    };
    let log_file_path = env::var("LOG_FILE")?.map(PathBuf::from);
    Ok(Self { number, text, log_file_path })
  }

  /// Creates configuration from command-line `args` only.
  pub fn from_args(args: impl IntoIterator<Item=String>) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
      match arg.as_str() {
        "--number" => {
          let value = args.next().ok_or(ConfigError::MissingValue("--number"))?;
          config.number = Some(parse_number(value)?);
        }
        "--text" => {
          config.text = Some(args.next().ok_or(ConfigError::MissingValue("--text"))?);
        }
        _ => return Err(ConfigError::UnknownArgument(arg)),
      }
    }
    Ok(config)
  }
}

fn parse_number(value: String) -> Result<i64, ConfigError> {
  value.trim().parse().map_err(|cause| ConfigError::InvalidNumber { value, cause })
}
