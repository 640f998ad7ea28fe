// Attractions CLI client entry point

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod api;
mod config;
mod models;
mod views;

use api::{ApiClientError, AttractionsClient};
use config::ClientConfig;

/// Attractions CLI - browse attractions and like them
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List all attractions
    List,
    /// Show one attraction in full
    Show {
        /// Attraction id
        id: i32,
    },
    /// Add a like to an attraction
    Like {
        /// Attraction id
        id: i32,
    },
    /// Remove a like from an attraction
    Unlike {
        /// Attraction id
        id: i32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env();
    tracing::debug!("using attractions service at {}", config.api_url);

    let cli = Cli::parse();

    match run(&config, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &ClientConfig, command: Commands) -> Result<(), ApiClientError> {
    let client = AttractionsClient::new(config)?;

    match command {
        Commands::List => {
            let attractions = client.list_attractions().await?;
            println!("{}", views::list::render_list(&attractions));
        }
        Commands::Show { id } => match client.get_attraction(id).await? {
            Some(attraction) => println!("{}", views::detail::render_detail(&attraction)),
            None => println!("No attraction found."),
        },
        Commands::Like { id } => {
            let ack = client.like(id).await?;
            println!("{} (likes: {})", ack.message, ack.likes);
        }
        Commands::Unlike { id } => {
            let ack = client.unlike(id).await?;
            println!("{}", ack.message);
        }
    }

    Ok(())
}
