use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::OptionPresenceExt;

/// Gets filter directives from environment variable `$env`, pushing a warning onto `$warnings` and returning `None` if
/// it is set but cannot be read.
macro_rules! filter_directives {
  ($env:literal, $warnings:expr) => {{
    #[cfg(feature = "app_env")]
    let directives = crate::run_or_compile_time_env!($env).map_err(|e| e.to_string());
    #[cfg(not(feature = "app_env"))]
    let directives = match std::env::var($env) {
      Ok(directives) => Ok(Some(directives)),
      Err(std::env::VarError::NotPresent) => Ok(None),
      Err(e) => Err(format!("environment variable '{}': {}", $env, e)),
    };
    directives.unwrap_or_else(|warning| {
      $warnings.push(warning);
      None
    })
  }};
}

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the global subscriber. Filters that were not set explicitly are read from the `CONSOLE_LOG` and
  /// `FILE_LOG` environment variables. Variables that cannot be read are reported as warnings once the subscriber is
  /// installed.
  pub fn build(self) -> AppTracing {
    let mut warnings = Vec::new();
    let console_filter = self.console_filter
      .unwrap_or_else(|| env_filter(filter_directives!("CONSOLE_LOG", warnings)));
    let file_filter = self.file_filter;
    let file = self.log_file_path.as_deref()
      .map(|p| (p, file_filter.unwrap_or_else(|| env_filter(filter_directives!("FILE_LOG", warnings)))));
    let app_tracing = AppTracing::new(console_filter, file);
    for warning in warnings {
      tracing::warn!("Ignoring log filter: {}", warning);
    }
    app_tracing
  }
}

/// Creates a filter from `directives`. Invalid directives are skipped and reported by [`EnvFilter::new`]; the valid
/// ones are kept.
fn env_filter(directives: Option<String>) -> EnvFilter {
  directives
    .branch_on_presence(EnvFilter::new)
    .otherwise(EnvFilter::default)
}

pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(&Path, EnvFilter)>) -> Self {
    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    #[cfg(feature = "app_tracing_file")]
    let _file_tracing = {
      let mut file_error = None;
      let (file_layer, file_tracing) = file
        .branch_on_presence(|(file_path, filter)| match create_log_file(file_path) {
          Err(e) => {
            file_error = Some((file_path, e));
            (None, FileTracing::default())
          }
          Ok(log_file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(io::BufWriter::new(log_file));
            let layer = tracing_subscriber::fmt::layer()
              .with_writer(non_blocking)
              .with_ansi(false)
              .with_filter(filter);
            (Some(layer), FileTracing(Some(guard)))
          }
        })
        .otherwise(|| (None, FileTracing::default()));
      layered.with(file_layer).init();
      file_error.run_if_present(|(file_path, e)| {
        tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
      });
      file_tracing
    };
    #[cfg(not(feature = "app_tracing_file"))]
    let _file_tracing = {
      layered.init();
      file.run_if_present(|(file_path, _)| {
        tracing::warn!("Cannot log to file '{}'; file logging is disabled", file_path.display());
      });
      FileTracing
    };

    Self { _file_tracing }
  }
}

#[cfg_attr(not(feature = "app_tracing_file"), allow(dead_code))]
fn create_log_file(file_path: &Path) -> Result<File, io::Error> {
  if let Some(parent) = file_path.parent() {
    create_dir_all(parent)?;
  }
  File::create(file_path)
}
