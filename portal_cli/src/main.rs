mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portal_lib::{CancelToken, PortalClient, PortalConfig, PortalError};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Query the academic portal backend")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// TOML config file; environment variables override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login(commands::login::LoginArgs),
    /// Forget the stored session
    Logout,
    /// List or create program allocations
    Allocations(commands::admin::AllocationsArgs),
    /// Show the access module tree
    AccessModules(commands::admin::AccessModulesArgs),
    /// Show a teacher
    Teacher(commands::teacher::TeacherArgs),
    /// List a teacher's exams
    Exams(commands::teacher::TeacherArgs),
    /// List or create HR tasks
    Tasks(commands::teacher::TasksArgs),
    /// List or submit feedback forms
    Feedback(commands::student::FeedbackArgs),
    /// List a student's placements
    Placements(commands::student::PlacementsArgs),
    /// Show the academic calendar for a year
    Calendar(commands::calendar::CalendarArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portal=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // API failures reach the user as one normalized sentence
            match e.downcast_ref::<PortalError>() {
                Some(portal_err) => {
                    tracing::debug!("{}", portal_err);
                    eprintln!("{}", portal_err.user_message());
                }
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.output);

    let config = match &cli.config {
        Some(path) => PortalConfig::load(path)?,
        None => PortalConfig::from_env()?,
    };

    let cancel = CancelToken::new();
    let _guard = cancel.drop_guard();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });

    let mut client = PortalClient::new(&config, cancel)?;

    match &cli.command {
        Commands::Login(args) => commands::login::run(args, &mut client).await?,
        Commands::Logout => commands::login::run_logout(&mut client)?,
        Commands::Allocations(args) => {
            commands::admin::run_allocations(args, &client, &format).await?
        }
        Commands::AccessModules(args) => {
            commands::admin::run_access_modules(args, &client, &format).await?
        }
        Commands::Teacher(args) => commands::teacher::run(args, &client, &format).await?,
        Commands::Exams(args) => commands::teacher::run_exams(args, &client, &format).await?,
        Commands::Tasks(args) => commands::teacher::run_tasks(args, &client, &format).await?,
        Commands::Feedback(args) => {
            commands::student::run_feedback(args, &client, &format).await?
        }
        Commands::Placements(args) => {
            commands::student::run_placements(args, &client, &format).await?
        }
        Commands::Calendar(args) => commands::calendar::run(args, &client, &format).await?,
    }

    Ok(())
}
