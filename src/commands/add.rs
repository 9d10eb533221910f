use clap::Args;
use serde::Serialize;

use goman::defaults::Defaults;
use goman::log_status;
use goman::project::Project;
use goman::scaffold::{self, AddRequest, AddResult};
use goman::Error;

use super::{CmdResult, GlobalArgs};

pub const LONG_ABOUT: &str = "Add (goman add) will create a new command, with a license and
the appropriate structure for a goman-based CLI application,
and register it to its parent (default rootCmd).

If you want your command to be public, pass in the command name
with an initial uppercase letter.

Example: goman add server -> resulting in a new cmd/server.go";

#[derive(Args)]
pub struct AddArgs {
    /// Command name; dashes and underscores become camelCase
    pub name: Option<String>,

    /// Target package name (e.g. github.com/geego/gean)
    #[arg(short = 't', long = "package")]
    pub package: Option<String>,

    /// Parent command variable, e.g. rootCmd or cmd.RootCmd [default: rootCmd]
    #[arg(short = 'p', long)]
    pub parent: Option<String>,

    /// Overwrite the command file if it already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub result: AddResult,
}

fn resolve_project(package: Option<&str>, defaults: &Defaults) -> goman::Result<Project> {
    match package {
        Some(package) if !package.is_empty() => Project::from_package(package, defaults),
        _ => {
            let wd = std::env::current_dir().map_err(|e| {
                Error::internal_io(e.to_string(), Some("get working directory".to_string()))
            })?;
            Project::from_path(&wd, defaults)
        }
    }
}

pub fn run(args: AddArgs, global: &GlobalArgs) -> CmdResult<AddOutput> {
    let name = args.name.ok_or_else(|| {
        Error::validation_missing_argument(vec!["name".to_string()])
            .with_hint("add needs a name for the command, e.g. 'goman add server'")
    })?;

    let defaults = global.load_defaults()?;
    let project = resolve_project(args.package.as_deref(), &defaults)?;
    log_status!(
        "add",
        "Project {} at {}",
        project.name,
        project.abs_path.display()
    );

    let request = AddRequest {
        name,
        parent: args.parent,
        force: args.force,
    };
    let result = scaffold::add_command(&request, &project, &defaults)?;
    crate::tty::status(&result.message);

    Ok((
        AddOutput {
            command: "add",
            result,
        },
        0,
    ))
}
