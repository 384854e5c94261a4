//! VyomNetra CLI: the main entry point.
//!
//! Commands:
//! - `serve`     Start the HTTP chat endpoint
//! - `ask`       Answer a single message and exit
//! - `classify`  Print the topic a message routes to
//! - `config`    Print a starter config or check the current one

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "vyomnetra",
    about = "VyomNetra: space and astronomy chatbot",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP chat endpoint
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Answer one message and print the reply
    Ask {
        /// The question to ask
        #[arg(short, long)]
        message: String,

        /// Print the full exchange as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which topic a message is classified as
    Classify {
        /// The message to classify
        message: String,
    },

    /// Print a starter config file
    Config {
        /// Load and validate the current config instead
        #[arg(long)]
        check: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Ask { message, json } => commands::ask::run(&message, json).await?,
        Commands::Classify { message } => commands::classify::run(&message),
        Commands::Config { check } => commands::config_cmd::run(check)?,
    }

    Ok(())
}
