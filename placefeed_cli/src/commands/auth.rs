use anyhow::Result;
use clap::Args;
use placefeed_lib::{Auth, Storage};

use crate::output::{print_json, print_user_table, OutputFormat};

#[derive(Args)]
pub struct LoginArgs {
    /// Nickname to log in with
    pub nickname: String,
}

pub fn run_login(args: &LoginArgs, storage: &Storage, format: &OutputFormat) -> Result<()> {
    let auth = Auth::new(storage.clone());
    let user = auth.login(&args.nickname)?;
    match format {
        OutputFormat::Table => print_user_table(&user),
        OutputFormat::Json => print_json(&user),
    }
    Ok(())
}

pub fn run_logout(storage: &Storage) -> Result<()> {
    Auth::new(storage.clone()).logout()?;
    println!("logged out");
    Ok(())
}

pub fn run_whoami(storage: &Storage, format: &OutputFormat) -> Result<()> {
    let state = Auth::new(storage.clone()).auth_state();
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "isLoggedIn": state.is_logged_in,
            "userInfo": state.user_info,
        })),
        OutputFormat::Table => match state.user_info {
            Some(user) if state.is_logged_in => print_user_table(&user),
            _ => println!("not logged in"),
        },
    }
    Ok(())
}
