mod commands;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use placefeed_lib::{Client, FileStorage, LogNotifier, Storage};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "placefeed")]
#[command(about = "Browse demo posts and manage local app state")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts from the demo backend
    Posts(commands::posts::PostsArgs),
    /// Show a single post by ID
    Post(commands::posts::PostArgs),
    /// Log in with a nickname (mock, local-only)
    Login(commands::auth::LoginArgs),
    /// Log out and clear local auth state
    Logout,
    /// Show the current login state
    Whoami,
    /// Show or change app settings
    Settings(commands::settings::SettingsArgs),
    /// Show, save, or clear the settings draft text
    Draft(commands::settings::DraftArgs),
}

fn state_file() -> PathBuf {
    if let Ok(path) = std::env::var("PLACEFEED_STATE_FILE") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    let dir = std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());
    dir.join(".placefeed.json")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("placefeed=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::new().notifier(Arc::new(LogNotifier));
    let storage = Storage::new(Arc::new(FileStorage::open(state_file())?));

    match &cli.command {
        Commands::Posts(args) => commands::posts::run_list(args, &client, &format).await?,
        Commands::Post(args) => commands::posts::run_show(args, &client, &format).await?,
        Commands::Login(args) => commands::auth::run_login(args, &storage, &format)?,
        Commands::Logout => commands::auth::run_logout(&storage)?,
        Commands::Whoami => commands::auth::run_whoami(&storage, &format)?,
        Commands::Settings(args) => commands::settings::run_settings(args, &storage, &format)?,
        Commands::Draft(args) => commands::settings::run_draft(args, &storage)?,
    }

    Ok(())
}
