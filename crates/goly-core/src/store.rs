use crate::error::Result;
use crate::key::ShortKey;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One row of the stats listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsEntry {
    /// The full short URL (base URL + key).
    pub short_url: String,
    /// Successful resolves observed at snapshot time.
    pub clicks: u64,
    /// The original URL the key maps to.
    pub original_url: String,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record becomes unresolvable.
    pub expires_at: Timestamp,
}

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    /// The original URL to be shortened.
    pub original_url: String,
    /// Days until the mapping expires. Zero or negative means the
    /// mapping expires immediately.
    pub ttl_days: i64,
    /// Optional custom alias for the shortened URL.
    pub custom_alias: Option<ShortKey>,
}

/// The URL mapping engine.
///
/// Implementations must support concurrent `shorten`, `resolve`, and
/// `stats` calls without external locking by callers.
#[async_trait]
pub trait UrlStore: Send + Sync + 'static {
    /// Creates a mapping and returns the full short URL.
    async fn shorten(&self, params: ShortenParams) -> Result<String>;

    /// Resolves a short URL (or bare key) to the original URL,
    /// counting the click. Expired mappings are evicted on detection.
    async fn resolve(&self, short_url: &str) -> Result<String>;

    /// Snapshots all currently-present mappings.
    ///
    /// Eviction is lazy: a record whose TTL elapsed but which no resolve
    /// has touched yet still appears here. The snapshot need not be
    /// linearizable with concurrent writes.
    async fn stats(&self) -> Result<Vec<StatsEntry>>;
}
