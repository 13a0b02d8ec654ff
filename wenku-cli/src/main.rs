//! wenku CLI - run and provision the wenku lookup server
//!
//! - `serve`: HTTP API over Postgres (or memory with `--memory`)
//! - `migrate`: create the schema
//! - `seed`: insert the sample poems and characters

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "wenku",
    author,
    version,
    about = "Chinese poetry, etymology, calendar, astronomy and culture lookup server"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create or update the database schema
    Migrate(commands::migrate::MigrateArgs),
    /// Insert the sample poems and characters
    Seed(commands::seed::SeedArgs),
}

/// Load `.env` from the working directory, then `~/.wenku/.env`.
///
/// Earlier files win; variables already in the environment win over both.
fn load_env() {
    dotenvy::dotenv().ok();
    if let Some(home) = dirs::home_dir() {
        dotenvy::from_path(home.join(".wenku").join(".env")).ok();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }
    Ok(())
}
