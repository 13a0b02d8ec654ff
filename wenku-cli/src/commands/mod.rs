//! Command implementations for the wenku CLI

pub mod migrate;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use wenku_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use wenku_server::{PgStore, SeedPolicy};

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

/// Connection settings shared by every command that talks to Postgres
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled connections
    #[arg(long, env = "WENKU_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open the pool and bring the schema up to date.
    pub async fn connect(&self) -> Result<PgStore> {
        let database_url = self.database_url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.wenku/.env",
        )?;

        let pool = create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(PgStore::new(pool))
    }
}

/// What seeding does with samples that are already stored
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicyArg {
    /// Insert every sample on every run
    #[default]
    Append,
    /// Leave samples that already exist alone
    SkipExisting,
}

impl From<SeedPolicyArg> for SeedPolicy {
    fn from(arg: SeedPolicyArg) -> Self {
        match arg {
            SeedPolicyArg::Append => SeedPolicy::Append,
            SeedPolicyArg::SkipExisting => SeedPolicy::SkipExisting,
        }
    }
}
