//! Insert the sample poems and characters from the command line

use anyhow::{Context, Result};
use clap::Args;
use wenku_server::seed_samples;

use super::{DatabaseArgs, SeedPolicyArg};

#[derive(Args, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// How to treat samples that are already stored
    #[arg(long, value_enum, default_value_t = SeedPolicyArg::Append)]
    pub policy: SeedPolicyArg,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let store = args.database.connect().await?;

    let result = seed_samples(&store, args.policy.into()).await;
    store.close().await;
    let report = result.context("Failed to seed sample data")?;

    println!(
        "Seeded {} poems and {} characters",
        report.poems, report.characters
    );
    Ok(())
}
