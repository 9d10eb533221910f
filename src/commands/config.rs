use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use goman::defaults::{self, Defaults, GomanConfig};
use goman::license;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore goman.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a key under "defaults" (value parsed as JSON, else a string)
    Set {
        /// Key name (e.g., author, license, parent, source_roots)
        key: String,
        /// Value to set
        value: String,
    },
    /// Reset configuration to built-in defaults (deletes goman.json)
    Reset,
    /// Show the path to goman.json
    Path,
    /// List built-in license names
    Licenses,
}

#[derive(Debug, Serialize, Default)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<GomanConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<String>>,
}

pub fn run(args: ConfigArgs, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin, global),
        ConfigCommand::Set { key, value } => set(&key, &value, global),
        ConfigCommand::Reset => reset(global),
        ConfigCommand::Path => path(global),
        ConfigCommand::Licenses => licenses(),
    }
}

fn show(builtin: bool, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let output = if builtin {
        ConfigOutput {
            command: "config.show".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            ..ConfigOutput::default()
        }
    } else {
        ConfigOutput {
            command: "config.show".to_string(),
            config: Some(global.load_config()?),
            path: Some(global.config_path()?.display().to_string()),
            ..ConfigOutput::default()
        }
    };

    Ok((output, 0))
}

fn set(key: &str, raw: &str, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let path = global.config_path()?;
    let mut config = defaults::load_config_for_update(&path)?;

    let value = defaults::set_default(&mut config, key, raw)?;
    if key == "license" {
        license::resolve(&config.defaults)?;
    }

    defaults::save_config(&config, &path)?;

    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            config: Some(config),
            path: Some(path.display().to_string()),
            key: Some(key.to_string()),
            value: Some(value),
            ..ConfigOutput::default()
        },
        0,
    ))
}

fn reset(global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let path = global.config_path()?;
    let deleted = defaults::reset_config(&path)?;

    Ok((
        ConfigOutput {
            command: "config.reset".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            path: Some(path.display().to_string()),
            deleted: Some(deleted),
            ..ConfigOutput::default()
        },
        0,
    ))
}

fn path(global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let path = global.config_path()?;
    let exists = path.exists();

    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            path: Some(path.display().to_string()),
            exists: Some(exists),
            ..ConfigOutput::default()
        },
        0,
    ))
}

fn licenses() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.licenses".to_string(),
            licenses: Some(license::builtin_names()),
            ..ConfigOutput::default()
        },
        0,
    ))
}
