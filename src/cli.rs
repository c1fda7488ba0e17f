use crate::data::support_info;
use crate::error::AppError;
use crate::models::EntryContext;
use crate::settings::Settings;
use crate::shell::{print_panel, print_regions, print_support, run_shell};
use crate::state::AppState;
use crate::storage::ConfigStore;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// IKISKY VPN client shell.
#[derive(Parser, Debug)]
#[command(name = "ikisky", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backing file for the stored configuration.
    #[arg(long, global = true, env = "IKISKY_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or replace the stored VPN configuration.
    Config(ConfigCommand),

    /// List the selectable regions.
    Regions,

    /// Print the connection status panel.
    Status(StatusArgs),

    /// Print support contacts.
    Support,

    /// Drive the client interactively from stdin.
    Shell,
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub subcommand: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the stored configuration and when it was saved.
    Show,

    /// Validate and store a new configuration, replacing the old one.
    Set {
        /// Raw configuration text.
        text: String,
    },
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Render the panel as if the connect button were ON.
    #[arg(long)]
    pub connected: bool,

    /// Region shown on the panel.
    #[arg(long)]
    pub region: Option<String>,
}

pub fn dispatch<W: Write>(cli: Cli, settings: &Settings, out: &mut W) -> Result<(), AppError> {
    let path = cli
        .config_file
        .clone()
        .unwrap_or_else(|| settings.config_path());
    info!("Using configuration file {:?}", path);
    let store = ConfigStore::open(path);

    match cli.command {
        Commands::Config(cmd) => match cmd.subcommand {
            ConfigSubcommand::Show => show_config(&store, out),
            ConfigSubcommand::Set { text } => {
                let mut state = AppState::new(store, &settings.app.default_region);
                set_config(&mut state, &text, out)
            }
        },
        Commands::Regions => {
            let state = AppState::new(store, &settings.app.default_region);
            print_regions(&state, out)?;
            Ok(())
        }
        Commands::Status(args) => {
            let mut state = AppState::new(store, &settings.app.default_region);
            if let Some(region) = args.region.as_deref() {
                state.select_region(region)?;
            }
            if args.connected {
                state.toggle_connection();
            }
            print_panel(&state, out)?;
            Ok(())
        }
        Commands::Support => {
            print_support(&support_info(), out)?;
            Ok(())
        }
        Commands::Shell => {
            let mut state = AppState::new(store, &settings.app.default_region);
            let stdin = io::stdin();
            run_shell(&mut state, stdin.lock(), out)?;
            Ok(())
        }
    }
}

fn show_config<W: Write>(store: &ConfigStore, out: &mut W) -> Result<(), AppError> {
    if !store.has_config() {
        writeln!(out, "No configuration stored. Add one with `ikisky config set <TEXT>`.")?;
        return Ok(());
    }
    writeln!(out, "{}", store.get_config())?;
    if let Some(created_at) = store.created_at() {
        writeln!(out, "saved at {}", created_at)?;
    }
    Ok(())
}

fn set_config<W: Write>(state: &mut AppState, text: &str, out: &mut W) -> Result<(), AppError> {
    let feedback = state.submit_config(text, EntryContext::Update);
    if !feedback.is_success() {
        return Err(AppError::Entry {
            outcome: feedback.outcome,
            message: feedback.message,
        });
    }
    writeln!(out, "{}", feedback.message)?;
    Ok(())
}
