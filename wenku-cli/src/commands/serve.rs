//! HTTP server command
//!
//! Serves from Postgres by default, or from process memory with `--memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use wenku_server::{run_server, ContentStore, MemoryStore, ServerConfig};

use super::{DatabaseArgs, SeedPolicyArg};

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "WENKU_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep all data in memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub memory: bool,

    /// What POST /api/init-data does with samples already stored
    #[arg(long, value_enum, default_value_t = SeedPolicyArg::Append)]
    pub seed_policy: SeedPolicyArg,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        seed_policy: args.seed_policy.into(),
    };

    if args.memory {
        if args.database.database_url.is_some() {
            tracing::warn!("--memory set, ignoring database URL");
        }
        tracing::info!("Starting wenku server on {} (in-memory store)", args.bind);
        let store: Arc<dyn ContentStore> = Arc::new(MemoryStore::new());
        return run_server(store, config).await.context("Server error");
    }

    let store = Arc::new(args.database.connect().await?);
    tracing::info!("Starting wenku server on {}", args.bind);

    // Run server (blocks until shutdown)
    let result = run_server(store.clone(), config).await;
    store.close().await;
    result.context("Server error")?;

    Ok(())
}
