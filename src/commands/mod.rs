use std::path::PathBuf;

use goman::defaults::{self, Defaults, GomanConfig};
use goman::log_status;

pub type CmdResult<T> = goman::Result<(T, i32)>;

/// Options shared by every subcommand.
pub(crate) struct GlobalArgs {
    /// Explicit config file; when set it must exist and parse.
    pub config_file: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn config_path(&self) -> goman::Result<PathBuf> {
        match &self.config_file {
            Some(path) => Ok(path.clone()),
            None => goman::paths::goman_json(),
        }
    }

    pub fn load_config(&self) -> goman::Result<GomanConfig> {
        match &self.config_file {
            Some(path) => defaults::load_config_from(path),
            None => {
                let path = goman::paths::goman_json()?;
                log_status!("config", "Using {}", path.display());
                Ok(defaults::load_config_or_default(&path))
            }
        }
    }

    pub fn load_defaults(&self) -> goman::Result<Defaults> {
        Ok(self.load_config()?.defaults)
    }
}

pub mod add;
pub mod config;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (goman::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Add(args) => dispatch!(args, global, add),
        crate::Commands::Config(args) => dispatch!(args, global, config),

        // Special case: List uses raw output mode
        crate::Commands::List => {
            let err = goman::Error::validation_invalid_argument(
                "output_mode",
                "List command uses raw output mode",
                None,
                None,
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}
