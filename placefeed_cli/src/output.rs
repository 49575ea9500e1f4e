use placefeed_lib::types::Post;
use placefeed_lib::{AppSettings, UserInfo};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct PostRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    user_id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Body")]
    #[serde(rename = "Body")]
    body: String,
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Nickname")]
    #[serde(rename = "Nickname")]
    nickname: String,
    #[tabled(rename = "Logged in at")]
    #[serde(rename = "Logged in at")]
    login_time: String,
}

#[derive(Tabled, Serialize)]
struct SettingsRow {
    #[tabled(rename = "Dark mode")]
    #[serde(rename = "Dark mode")]
    dark_mode: bool,
    #[tabled(rename = "Page size")]
    #[serde(rename = "Page size")]
    page_size: i64,
    #[tabled(rename = "Debug")]
    #[serde(rename = "Debug")]
    debug: bool,
}

// -- Row builders --

fn build_post_rows(posts: &[Post]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| PostRow {
            id: p.id,
            user_id: p.user_id,
            title: truncate(&p.title, 48),
            body: truncate(&p.body, 64),
        })
        .collect()
}

fn build_user_row(user: &UserInfo) -> UserRow {
    UserRow {
        id: user.id,
        nickname: user.nickname.clone(),
        login_time: format_login_time(user.login_time),
    }
}

fn format_login_time(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(when) => when.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => millis.to_string(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// -- Table output --

pub fn print_posts_table(posts: &[Post]) {
    println!("{}", Table::new(build_post_rows(posts)));
}

pub fn print_user_table(user: &UserInfo) {
    println!("{}", Table::new([build_user_row(user)]));
}

pub fn print_settings_table(settings: &AppSettings) {
    let row = SettingsRow {
        dark_mode: settings.dark_mode,
        page_size: settings.page_size,
        debug: settings.debug,
    };
    println!("{}", Table::new([row]));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
