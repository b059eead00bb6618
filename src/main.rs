mod archive;
mod asset;
mod cli;
mod config;
mod constants;
mod descriptor;
mod error;
mod gemini;
mod orchestrator;
mod prompt;
mod utils;

use crate::cli::{process_command, Cli};
use crate::config::Config;
use crate::utils::print_failure;
use clap::Parser;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()?;

    if let Err(e) = process_command(client, cli, config).await {
        log::error!("{:?} error: {}", e.kind(), e);
        print_failure(&e);
        std::process::exit(1);
    }
    Ok(())
}
