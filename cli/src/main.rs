//! Forkline CLI — the command-line entry point for the layout engine.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use forkline_core::command::Command;
use forkline_core::response::Response;
use forkline_core::sys::Sys;
use forkline_core::types::config::Settings;
use tracing_subscriber::EnvFilter;


/// Lay out question/timeline trees for a node-graph renderer.
#[derive(Parser, Debug)]
#[command(name = "forkline", version, disable_help_subcommand = true)]
#[command(about = "Lay out question/timeline trees for a node-graph renderer")]
struct Cli {
    /// Directory holding settings.yaml (default: $FORKLINE_CONFIG_DIR or ~/.config/forkline)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}


#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print the positioned node/edge graph for a question document
    Layout {
        /// Question JSON file, or '-' for stdin
        path: String,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print counts and agent score averages for a question document
    Summary {
        /// Question JSON file, or '-' for stdin
        path: String,
    },
    /// Build the payload that submits a new question
    Ask {
        text: String,
    },
    /// Build the payload that forks a timeline
    Fork {
        /// Backend id of the timeline to fork
        timeline: String,
        text: String,
        /// Question document the timeline must belong to
        #[arg(long)]
        tree: Option<String>,
    },
    /// Show effective settings
    Config,
    /// Show help for a command or group
    Help {
        topic: Option<String>,
    },
}


impl From<CliCommand> for Command {
    fn from(cmd: CliCommand) -> Self {
        match cmd {
            CliCommand::Layout { path, pretty } => Command::Layout {
                path,
                pretty: pretty.then_some(true),
            },
            CliCommand::Summary { path } => Command::Summary { path },
            CliCommand::Ask { text } => Command::Ask { text },
            CliCommand::Fork { timeline, text, tree } => Command::Fork {
                timeline,
                text,
                path: tree,
            },
            CliCommand::Config => Command::Config,
            CliCommand::Help { topic } => Command::Help { topic },
        }
    }
}


fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir);
    tracing::debug!(config_dir = %config_dir.display(), "resolved config directory");
    let settings = match Settings::load(&config_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("forkline: {}", e);
            process::exit(1);
        }
    };

    let sys = Sys::new(settings);
    match sys.execute(cli.command.into()) {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("forkline error: {}", message);
            process::exit(1);
        }
    }
}


/// Logs go to stderr so stdout stays clean JSON. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}


fn resolve_config_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var("FORKLINE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("forkline")
}
