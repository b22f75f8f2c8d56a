//! CLI entry point for solivar

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solivar")]
#[command(version)]
#[command(about = "A minimal markdown blog engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a local server that renders pages on each request
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// List posts and tags
    List,

    /// Clean the public folder
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "solivar=debug,info"
    } else {
        "solivar=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let app = solivar::Solivar::new(&base_dir)?;

    match cli.command {
        Commands::Generate => {
            tracing::info!("Generating static files...");
            solivar::commands::generate::run(&app)?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            tracing::info!("Starting server at http://{}:{}", ip, port);
            solivar::server::start(&app, &ip, port).await?;
        }

        Commands::New { title } => {
            tracing::info!("Creating new post: {}", title);
            solivar::commands::new::run(&app, &title)?;
        }

        Commands::List => {
            solivar::commands::list::run(&app)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            solivar::commands::clean::run(&app)?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
