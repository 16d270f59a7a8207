mod cli;
mod repl;

use crate::cli::CLI;
use crate::repl::Repl;
use clap::Parser;
use goly_generator::SeqGenerator;
use goly_store::{InMemoryStore, StoreSettings};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        base_url = %config.base_url,
        default_ttl_days = config.default_ttl_days,
        counter_seed = config.counter_seed,
        "starting goly shell"
    );

    let settings = StoreSettings::builder().base_url(config.base_url).build();
    let store = InMemoryStore::new(settings, SeqGenerator::with_seed(config.counter_seed));

    Repl::new(Arc::new(store), config.default_ttl_days).run().await
}
