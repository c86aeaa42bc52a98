use std::error::Error;
use std::io;

use tracing::debug;

use presence_core::app::env;
use presence_core::app::tracing::AppTracingBuilder;

use crate::config::Config;

mod config;
mod scenario;

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv_path = env::load_dotenv_into_env();
  let config = Config::from_args_and_env(std::env::args().skip(1))?;
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(config.log_file_path.clone())
    .build();
  debug!(?dotenv_path, ?config, "loaded configuration");

  let stdout = io::stdout();
  scenario::run_all(&config, &mut stdout.lock())?;
  Ok(())
}
