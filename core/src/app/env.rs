use std::env::{self, VarError};
use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
  #[error("environment variable '{name}' is not valid unicode: {value:?}")]
  NotUnicode { name: &'static str, value: OsString },
}

/// Loads the `.env` file in the current directory (or one of its parents) into the process environment, returning
/// its path. Variables already set in the environment are not overridden.
pub fn load_dotenv_into_env() -> Option<PathBuf> {
  dotenvy::dotenv().ok() // Ignore error ok: .env file is not required.
}

/// Gets environment variable `name` at run time, returning `None` if it is not set.
pub fn var(name: &'static str) -> Result<Option<String>, EnvError> {
  match env::var(name) {
    Ok(value) => Ok(Some(value)),
    Err(VarError::NotPresent) => Ok(None),
    Err(VarError::NotUnicode(value)) => Err(EnvError::NotUnicode { name, value }),
  }
}

/// Gets environment variable `name` at run time, falling back to `compile_time` if it is not set.
pub fn run_or_compile_time_var(name: &'static str, compile_time: Option<&'static str>) -> Result<Option<String>, EnvError> {
  Ok(var(name)?.or_else(|| compile_time.map(str::to_owned)))
}

/// Gets an environment variable at run time, falling back to its value at compile time.
#[macro_export]
macro_rules! run_or_compile_time_env {
  ($env:literal) => {
    $crate::app::env::run_or_compile_time_var($env, option_env!($env))
  };
}
