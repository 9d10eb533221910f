use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{add, config};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "goman")]
#[command(version = VERSION)]
#[command(about = "Scaffold new commands for goman-based CLI applications")]
struct Cli {
    /// Use this config file instead of ~/.config/goman/goman.json
    #[arg(long, global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a command to a goman application
    #[command(visible_alias = "command", long_about = add::LONG_ABOUT)]
    Add(add::AddArgs),
    /// Manage goman configuration
    Config(config::ConfigArgs),
    /// List available commands (alias for --help)
    List,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        config_file: cli.config_file,
    };

    if matches!(cli.command, Commands::List) {
        let mut cmd = Cli::command();
        if cmd.print_help().is_err() {
            return std::process::ExitCode::FAILURE;
        }
        println!();
        return std::process::ExitCode::SUCCESS;
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::FAILURE;
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
