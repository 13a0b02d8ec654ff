//! Create the schema without starting the server

use anyhow::Result;
use clap::Args;

use super::DatabaseArgs;

#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = args.database.connect().await?;
    tracing::info!("database schema is up to date");
    store.close().await;
    Ok(())
}
