use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use realschool_application::AppContext;
use realschool_infrastructure::{ConfigService, RealSchoolPaths};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

mod commands;
mod logging;
mod terminal;

use terminal::{TerminalNavigator, TerminalNotifier};

#[derive(Parser)]
#[command(name = "realschool")]
#[command(about = "RealSchool - attendance management client", long_about = None)]
struct Cli {
    /// Directory holding config.toml and the session (overrides REALSCHOOL_HOME)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with mobile number and password
    Login {
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new company; its owner can then sign in
    Register {
        #[arg(long)]
        company: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Open the dashboard for the signed-in role
    Dashboard,
    /// List the menu entries available to the signed-in role
    Menu,
    /// Manage persons
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },
    /// Manage locations
    Location {
        #[command(subcommand)]
        action: NamedAction,
    },
    /// Manage designations
    Designation {
        #[command(subcommand)]
        action: NamedAction,
    },
    /// Manage person-to-location assignments
    Assignment {
        #[command(subcommand)]
        action: AssignmentAction,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        designation: String,
        #[arg(long)]
        password: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum NamedAction {
    List,
    Add {
        name: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AssignmentAction {
    List,
    /// Show the persons and locations that can be assigned
    Choices,
    Add {
        #[arg(long)]
        person: String,
        #[arg(long)]
        location: String,
    },
    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match bootstrap(cli.home.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&ctx, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Screens have already shown the failure to the user.
            tracing::debug!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap(home: Option<&std::path::Path>) -> Result<AppContext> {
    let paths = RealSchoolPaths::new(home);
    let config = ConfigService::new(&paths)
        .and_then(|service| service.get_config())
        .context("Failed to load configuration")?;

    logging::init(&config.logging.level);
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let ctx = AppContext::from_config(
        &config,
        &paths,
        Arc::new(TerminalNavigator),
        Arc::new(TerminalNotifier),
    )
    .context("Failed to initialize client")?;
    Ok(ctx)
}

async fn run(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login { mobile, password } => commands::session::login(ctx, mobile, password).await,
        Commands::Register {
            company,
            owner,
            mobile,
            password,
        } => commands::session::register(ctx, company, owner, mobile, password).await,
        Commands::Logout => {
            commands::session::logout(ctx).await;
            Ok(())
        }
        Commands::Whoami => commands::session::whoami(ctx).await,
        Commands::Dashboard => commands::dashboard::open(ctx).await,
        Commands::Menu => commands::session::menu(ctx).await,
        Commands::Person { action } => commands::directory::person(ctx, action).await,
        Commands::Location { action } => commands::directory::location(ctx, action).await,
        Commands::Designation { action } => commands::directory::designation(ctx, action).await,
        Commands::Assignment { action } => commands::directory::assignment(ctx, action).await,
    }
}
