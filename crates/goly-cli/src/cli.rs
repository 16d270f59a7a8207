use clap::Parser;
use goly_generator::seq::DEFAULT_SEED;
use goly_store::settings::{DEFAULT_BASE_URL, DEFAULT_TTL_DAYS};

pub const BASE_URL_ENV: &str = "GOLY_BASE_URL";
pub const DEFAULT_TTL_DAYS_ENV: &str = "GOLY_DEFAULT_TTL_DAYS";
pub const COUNTER_SEED_ENV: &str = "GOLY_COUNTER_SEED";

#[derive(Debug, Parser)]
#[command(name = "goly", about = "Interactive in-memory URL shortener")]
pub struct CLI {
    /// Public base URL prepended to short keys.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// TTL in days applied when none is entered at the prompt.
    #[arg(long, env = DEFAULT_TTL_DAYS_ENV, default_value_t = DEFAULT_TTL_DAYS)]
    pub default_ttl_days: i64,

    /// Starting value for the auto-key counter.
    #[arg(long, env = COUNTER_SEED_ENV, default_value_t = DEFAULT_SEED)]
    pub counter_seed: u64,
}
