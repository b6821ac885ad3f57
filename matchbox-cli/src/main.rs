use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use matchbox_lib::{PreferenceReconciler, UserId, config::CoreConfig};
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{action::Action, error::Error};

mod action;
mod apply;
mod error;
mod input;
mod show;

#[derive(Parser, Debug)]
#[command(name = "matchbox")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file holding the resources to choose from
    #[arg(short, long, global = true)]
    resources: Option<PathBuf>,

    /// JSON file holding the owner's persisted preference records
    #[arg(short, long, global = true)]
    preferences: Option<PathBuf>,

    /// Owner stamped on the produced records, overriding the configured one
    #[arg(short, long, global = true)]
    owner: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the working set after replaying the given actions
    Show {
        /// Actions such as `prefer:<id>`, `unprefer:<id>`, `up:<id>` or `down:<id>`
        actions: Vec<Action>,
    },
    /// Print the insert, update and delete batches after replaying the given actions
    Apply {
        /// Actions such as `prefer:<id>`, `unprefer:<id>`, `up:<id>` or `down:<id>`
        actions: Vec<Action>,
    },
}

fn main() -> ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let cfg = match CoreConfig::load() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            return sysexits::ExitCode::Config.into();
        }
    };

    // Logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
    }

    match run(&cli, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            err.exit_code().into()
        }
    }
}

fn run(cli: &Cli, cfg: &CoreConfig) -> Result<(), Error> {
    let owner: UserId = cli
        .owner
        .as_deref()
        .map(UserId::from)
        .or_else(|| cfg.owner_id.clone())
        .ok_or(Error::MissingOwner)?;
    let resources = input::resources(cli.resources.as_deref().ok_or(Error::MissingResources)?)?;
    let existing = cli
        .preferences
        .as_deref()
        .map(input::existing_preferences)
        .transpose()?
        .unwrap_or_default();

    let mut reconciler = PreferenceReconciler::new(resources, existing, owner);

    match &cli.command {
        Command::Show { actions } => {
            action::replay(&mut reconciler, actions)?;
            show::handle(&reconciler);
        }
        Command::Apply { actions } => {
            action::replay(&mut reconciler, actions)?;
            apply::handle(&reconciler, cli.pretty || cfg.pretty)?;
        }
    }

    Ok(())
}
