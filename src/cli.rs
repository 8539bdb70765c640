use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "liquid-ui",
    about = "Fan curve profiles and telemetry for liquidctl-managed cooling hardware",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file only, ignoring system and user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// List devices reported by liquidctl
    Devices,

    /// Show temperature, fan and pump speed for a device
    Status {
        /// liquidctl device index
        #[arg(short, long)]
        device: u32,
    },

    /// Manage saved fan curve profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// List saved profiles
    List,
    /// Show one profile's curve
    Show {
        name: String,
    },
    /// Create or replace a profile from TEMP:SPEED points
    Save {
        name: String,
        /// Curve point as TEMP:SPEED, e.g. 30:40 (repeatable, order is kept)
        #[arg(short, long = "point", value_name = "TEMP:SPEED", required = true)]
        points: Vec<String>,
    },
    /// Create or replace a profile from a JSON document ("-" for stdin)
    Import {
        file: PathBuf,
    },
    /// Delete a profile
    Delete {
        name: String,
    },
    /// Send a profile's curve to a device
    Apply {
        name: String,
        /// liquidctl device index
        #[arg(short, long)]
        device: u32,
    },
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: liquid-ui completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "liquid-ui",
        &mut std::io::stdout(),
    );
}
