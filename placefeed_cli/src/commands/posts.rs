use anyhow::Result;
use clap::Args;
use placefeed_lib::Client;

use crate::output::{print_json, print_posts_table, OutputFormat};

#[derive(Args)]
pub struct PostsArgs {
    /// Maximum number of posts to fetch
    #[arg(long)]
    pub limit: Option<i64>,
}

#[derive(Args)]
pub struct PostArgs {
    /// Post ID
    pub id: i64,
}

pub async fn run_list(args: &PostsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let posts = client.get_posts(args.limit).await?;
    match format {
        OutputFormat::Table => print_posts_table(&posts),
        OutputFormat::Json => print_json(&posts),
    }
    Ok(())
}

pub async fn run_show(args: &PostArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let post = client.get_post(args.id).await?;
    match format {
        OutputFormat::Table => print_posts_table(std::slice::from_ref(&post)),
        OutputFormat::Json => print_json(&post),
    }
    Ok(())
}
