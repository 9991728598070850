use std::process::ExitCode;

use clap::{Parser, Subcommand};
use icarus_client::{
    client_config::ClientConfig,
    http_optimizer::{HttpOptimizer, HttpOptimizerParams},
};
use mimalloc::MiMalloc;
use tracing::debug;

use crate::search::SearchArgs;

mod interactive;
mod render;
mod schema;
mod search;
mod submit;

#[cfg(test)]
mod test_utils;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about = "Find the cheapest flight per kilometer.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,

    /// Optimization endpoint, overrides ICARUS_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one search and print the best option
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        args: SearchArgs,
    },
    /// Fill in and submit the form from a prompt
    #[command(visible_alias = "i")]
    Interactive,
    /// Print the JSON schemas of the optimization API contract
    Schema,
}

fn build_optimizer(api_url: Option<String>) -> HttpOptimizer {
    let config = ClientConfig::from_env().with_api_url(api_url);
    debug!("Using optimization endpoint {}", config.api_url);

    HttpOptimizer::new(HttpOptimizerParams::from(&config))
}

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Search { args } => {
            let optimizer = build_optimizer(cli.api_url);
            search::run(args, &optimizer).await
        }
        Commands::Interactive => {
            let optimizer = build_optimizer(cli.api_url);
            interactive::run(&optimizer).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Schema => {
            schema::run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
