//! Postcraft CLI — the main entry point.
//!
//! Commands:
//! - `onboard`   — Write a default config file
//! - `generate`  — Generate one post and print it
//! - `options`   — List template post types and tones
//! - `gateway`   — Start the HTTP API server

use clap::{Parser, Subcommand};

mod commands;

use commands::generate::GenerateArgs;

#[derive(Parser)]
#[command(
    name = "postcraft",
    about = "Postcraft — LinkedIn posts from AI or templates",
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
    /// Initialize configuration
    Onboard,

    /// Generate a single post
    Generate {
        /// Subject of the post
        #[arg(short, long)]
        topic: String,

        /// Tone (professional, thoughtful, inspirational, analytical, casual, technical)
        #[arg(long)]
        tone: Option<String>,

        /// Post type (thought_leadership, industry_insight, career_tip, company_update, ...)
        #[arg(long)]
        post_type: Option<String>,

        /// Leave out the hashtag line
        #[arg(long)]
        no_hashtags: bool,

        /// Skip the AI provider and use templates
        #[arg(long)]
        template_only: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List template post types and tones
    Options {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
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
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Generate {
            topic,
            tone,
            post_type,
            no_hashtags,
            template_only,
            json,
        } => {
            commands::generate::run(GenerateArgs {
                topic,
                tone,
                post_type,
                no_hashtags,
                template_only,
                json,
            })
            .await?
        }
        Commands::Options { json } => commands::options::run(json).await?,
        Commands::Gateway { port } => commands::gateway::run(port).await?,
    }

    Ok(())
}
