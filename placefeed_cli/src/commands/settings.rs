use anyhow::Result;
use clap::{Args, Subcommand};
use placefeed_lib::{Settings, Storage};

use crate::output::{print_json, print_settings_table, OutputFormat};

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set {
        /// Enable or disable dark mode
        #[arg(long)]
        dark_mode: Option<bool>,
        /// Posts per page
        #[arg(long)]
        page_size: Option<i64>,
        /// Enable or disable debug mode
        #[arg(long)]
        debug: Option<bool>,
    },
}

#[derive(Args)]
pub struct DraftArgs {
    #[command(subcommand)]
    pub action: DraftAction,
}

#[derive(Subcommand)]
pub enum DraftAction {
    /// Show the saved draft
    Show,
    /// Save draft text
    Set { text: String },
    /// Clear the saved draft
    Clear,
}

pub fn run_settings(args: &SettingsArgs, storage: &Storage, format: &OutputFormat) -> Result<()> {
    let service = Settings::new(storage.clone());

    if let SettingsAction::Set {
        dark_mode,
        page_size,
        debug,
    } = &args.action
    {
        let mut settings = service.load();
        if let Some(value) = dark_mode {
            settings.dark_mode = *value;
        }
        if let Some(value) = page_size {
            settings.page_size = *value;
        }
        if let Some(value) = debug {
            settings.debug = *value;
        }
        service.save(&settings)?;
    }

    let settings = service.load();
    match format {
        OutputFormat::Table => print_settings_table(&settings),
        OutputFormat::Json => print_json(&settings),
    }
    Ok(())
}

pub fn run_draft(args: &DraftArgs, storage: &Storage) -> Result<()> {
    let service = Settings::new(storage.clone());
    match &args.action {
        DraftAction::Show => match service.draft() {
            Some(text) => println!("{}", text),
            None => println!("no draft saved"),
        },
        DraftAction::Set { text } => service.save_draft(text)?,
        DraftAction::Clear => service.clear_draft()?,
    }
    Ok(())
}
