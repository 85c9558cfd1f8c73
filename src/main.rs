mod catalog;
mod cli;
mod directory;
mod model;
mod summary;
mod wizard;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args).await
}
