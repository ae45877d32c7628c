use clap::{Parser, Subcommand};
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

use svara_cli::{handle_tags_command, handle_tasks_command, OutputFormat, TagsCommands, TasksCommands};
use svara_client::{ApiClient, ClientConfig, API_BASE_ENV};

#[derive(Parser)]
#[command(name = "svara")]
#[command(about = "Svara CLI - simple task management")]
#[command(version)]
struct Cli {
    /// API base URL (overrides the SVARA_API_BASE environment variable)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tasks
    #[command(subcommand)]
    Tasks(TasksCommands),
    /// Manage tags
    #[command(subcommand)]
    Tags(TagsCommands),
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = match cli.api_base {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(
        "using API base {} ({} or --api-base)",
        config.base_url(),
        API_BASE_ENV
    );

    let client = ApiClient::new(config)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    match cli.command {
        Commands::Tasks(command) => handle_tasks_command(&client, command, format).await,
        Commands::Tags(command) => handle_tags_command(&client, command, format).await,
    }
}
