//! SteamScout CLI - LLM-powered Steam game recommendations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scoutctl::commands;

#[derive(Parser)]
#[command(name = "scoutctl")]
#[command(about = "SteamScout - AI-powered Steam game recommendations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend games for a free-text query
    Search {
        /// What you feel like playing, in your own words
        query: String,

        /// Require at least one of these genres (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Override the configured provider ("openai" or "gemini")
        #[arg(long)]
        provider: Option<String>,
    },

    /// Show the curated popular games list
    Popular,

    /// Print the genre vocabulary used for --genre filters
    Genres,

    /// Show or change provider and API key
    Config {
        /// Store an API key
        #[arg(long)]
        set_key: Option<String>,

        /// Select the provider ("openai" or "gemini")
        #[arg(long)]
        provider: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            genres,
            provider,
        } => commands::search(query, genres, provider).await,
        Commands::Popular => commands::popular(),
        Commands::Genres => commands::genres(),
        Commands::Config { set_key, provider } => commands::config(set_key, provider),
    }
}
