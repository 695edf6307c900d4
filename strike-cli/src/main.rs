//! Strike lane booking CLI.
//!
//! # Usage
//!
//! ```bash
//! # Run the local booking service
//! strike serve
//!
//! # Book two lanes for three players
//! strike book --date 2024-12-25 --time 18:00 --people 3 --lanes 2 \
//!     --shoe 42 --shoe 43 --shoe 44
//!
//! # Show the last confirmation of this session
//! strike confirmation
//!
//! # Price breakdown without booking
//! strike quote --people 3 --lanes 2
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use strike_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "strike")]
#[command(author, version, about = "Book bowling lanes")]
struct Cli {
    /// Booking service base URL (overrides `api.base_url`)
    #[arg(long, global = true, env = "STRIKE_API_URL")]
    api_url: Option<String>,

    /// Directory holding this session's confirmation (overrides `session.dir`)
    #[arg(long, global = true, env = "STRIKE_SESSION_DIR")]
    session_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the booking form and submit it
    Book(commands::book::BookArgs),
    /// Show the most recent confirmation
    Confirmation,
    /// Show the price breakdown for a party
    Quote {
        #[arg(short, long)]
        people: u32,

        #[arg(short, long)]
        lanes: u32,
    },
    /// Run the local booking service
    Serve {
        /// Port to listen on (overrides `server.port`)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strike_cli=info,strike_core=info,strike_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(dir) = cli.session_dir {
        config.session.dir = dir;
    }

    match cli.command {
        Commands::Book(args) => commands::book::run(&config, args).await,
        Commands::Confirmation => commands::confirmation::run(&config),
        Commands::Quote { people, lanes } => commands::quote::run(&config, people, lanes),
        Commands::Serve { port } => commands::serve::run(&config, port).await,
    }
}
