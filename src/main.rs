//! useradmin: list, create, edit and delete users on a REST collection.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use useradmin::api;
use useradmin::app;
use useradmin::config;
use useradmin::constants;
use useradmin::env;
use useradmin::logging;
use useradmin::models;
use useradmin::progress;
use useradmin::shell;
use useradmin::view;

use std::io::IsTerminal;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use strum::IntoEnumIterator;

use api::http::HttpUserApi;
use app::{AlwaysConfirm, Confirm, Outcome, StdinConfirm, UserAdmin};
use cli::args::{AddArgs, Cli, Command, EditArgs};
use config::Config;
use env::Env;
use progress::LoadingIndicator;
use view::ViewFormat;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    let work_dir = std::env::current_dir().ok();
    let mut config = Config::load(work_dir.as_deref(), cli.config.as_deref(), &env)
        .context("failed to load configuration")?;

    // Layer 1: CLI flags
    if let Some(ref base_url) = cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(format) = cli.format {
        config.ui.format = format;
    }
    if cli.yes {
        config.ui.confirm_deletes = false;
    }

    logging::init(&logging::resolve_filter(&config.log.level, cli.verbose, &env));
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let command = match cli.command {
        Command::Version => return run_version(),
        Command::Config => return run_config(&config),
        command => command,
    };

    let draw_progress = !cli.no_progress
        && config.ui.format == ViewFormat::Terminal
        && std::io::stderr().is_terminal();
    let mut admin = build_admin(&config, draw_progress)?;

    match command {
        Command::List => run_list(&mut admin, &config).await,
        Command::Add(args) => run_add(&mut admin, &config, &args).await,
        Command::Edit(args) => run_edit(&mut admin, &config, &args).await,
        Command::Delete { id } => run_delete(&mut admin, &config, id).await,
        Command::Shell => run_shell(&mut admin, &config).await,
        Command::Version | Command::Config => Ok(()),
    }
}

fn build_admin(config: &Config, draw_progress: bool) -> Result<UserAdmin> {
    let client = HttpUserApi::new(&config.api).context("failed to build HTTP client")?;
    Ok(UserAdmin::new(
        Arc::new(client),
        LoadingIndicator::new(draw_progress),
    ))
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Print the effective configuration as TOML.
fn run_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("failed to serialize configuration")?;
    print!("{rendered}");
    Ok(())
}

/// Load the mirror; every one-shot command starts a fresh session.
async fn start_session(admin: &mut UserAdmin) -> Result<()> {
    if admin.load().await != Outcome::Applied {
        bail!("{}", admin.banner().unwrap_or(constants::LOAD_FAILED));
    }
    Ok(())
}

/// Print the page, then turn an unsuccessful outcome into an error.
fn finish(admin: &UserAdmin, config: &Config, outcome: Outcome) -> Result<()> {
    print!("{}", config.ui.format.render(&admin.page()));
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Declined => {
            eprintln!("Cancelled.");
            Ok(())
        }
        Outcome::Failed | Outcome::Invalid => {
            bail!("{}", admin.banner().unwrap_or("operation failed"))
        }
    }
}

async fn run_list(admin: &mut UserAdmin, config: &Config) -> Result<()> {
    let outcome = admin.load().await;
    finish(admin, config, outcome)
}

async fn run_add(admin: &mut UserAdmin, config: &Config, args: &AddArgs) -> Result<()> {
    start_session(admin).await?;

    admin.open_create();
    let draft = args.draft();
    for field in models::Field::iter() {
        admin.set_field(field, draft.get(field));
    }

    let outcome = admin.submit().await;
    finish(admin, config, outcome)
}

async fn run_edit(admin: &mut UserAdmin, config: &Config, args: &EditArgs) -> Result<()> {
    start_session(admin).await?;

    if !admin.open_edit(args.id) {
        bail!("no user with id {}", args.id);
    }
    for (field, value) in args.changes() {
        admin.set_field(field, value);
    }

    let outcome = admin.submit().await;
    finish(admin, config, outcome)
}

async fn run_delete(admin: &mut UserAdmin, config: &Config, id: u64) -> Result<()> {
    start_session(admin).await?;

    let confirm: &dyn Confirm = if config.ui.confirm_deletes {
        &StdinConfirm
    } else {
        &AlwaysConfirm
    };
    let outcome = admin.delete(id, confirm).await;
    finish(admin, config, outcome)
}

async fn run_shell(admin: &mut UserAdmin, config: &Config) -> Result<()> {
    admin.load().await;

    let stdin = std::io::stdin();
    let shell = shell::Shell::new(
        stdin.lock(),
        std::io::stdout(),
        config.ui.format,
        config.ui.confirm_deletes,
    );
    shell.run(admin).await.context("shell I/O failed")
}

