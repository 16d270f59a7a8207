use crate::settings::StoreSettings;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use goly_core::{Result, ShortKey, ShortenParams, StatsEntry, StoreError, UrlStore};
use goly_generator::Generator;
use jiff::{SignedDuration, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// TTLs beyond this are saturated; keeps the duration arithmetic in range.
const MAX_TTL_DAYS: i64 = 4_000_000;

/// In-memory storage entry for a URL mapping.
///
/// `original_url`, `created_at`, and `expires_at` are immutable once
/// inserted; only the click counter and expiry-triggered removal mutate
/// an entry's lifecycle.
#[derive(Debug)]
struct Entry {
    original_url: String,
    created_at: Timestamp,
    expires_at: Timestamp,
    clicks: AtomicU64,
}

impl Entry {
    fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

/// In-memory implementation of the [`UrlStore`] trait using DashMap.
///
/// DashMap's sharded locks allow concurrent shortens and resolves of
/// different keys without blocking each other; no lock is held across a
/// full operation. The generator owns the atomic counter for auto-keys,
/// so the auto path performs no existence check at all.
///
/// Eviction is lazy: an expired entry is removed by the first resolve
/// that observes the expiry. There is no background sweep, so `stats`
/// may list expired-but-untouched entries.
#[derive(Debug)]
pub struct InMemoryStore<G: Generator> {
    settings: StoreSettings,
    generator: G,
    entries: DashMap<String, Entry>,
}

impl<G: Generator> InMemoryStore<G> {
    /// Creates a new store with an empty mapping.
    pub fn new(settings: StoreSettings, generator: G) -> Self {
        Self {
            settings,
            generator,
            entries: DashMap::new(),
        }
    }

    fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), key)
    }

    /// Recognized scheme prefix check; anything not starting with
    /// `http` is rejected outright.
    fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http") {
            return Err(StoreError::InvalidUrl(url.to_owned()));
        }
        Ok(())
    }

    /// Computes the expiry instant, saturating at the timestamp bounds.
    ///
    /// A zero or negative TTL yields an expiry at or before creation, so
    /// the mapping expires immediately.
    fn expires_at(created_at: Timestamp, ttl_days: i64) -> Timestamp {
        let days = ttl_days.clamp(-MAX_TTL_DAYS, MAX_TTL_DAYS);
        // saturating_add only errors for calendar-unit spans, never for a
        // SignedDuration, so the fallback is unreachable.
        created_at
            .saturating_add(SignedDuration::from_hours(days * 24))
            .unwrap_or(Timestamp::MAX)
    }
}

#[async_trait]
impl<G: Generator> UrlStore for InMemoryStore<G> {
    async fn shorten(&self, params: ShortenParams) -> Result<String> {
        Self::validate_url(&params.original_url)?;

        let created_at = Timestamp::now();
        let entry = Entry {
            original_url: params.original_url,
            created_at,
            expires_at: Self::expires_at(created_at, params.ttl_days),
            clicks: AtomicU64::new(0),
        };

        let key = match params.custom_alias {
            Some(alias) => {
                // Atomic check-and-insert so two concurrent claims of the
                // same alias cannot both succeed.
                match self.entries.entry(alias.as_str().to_owned()) {
                    MapEntry::Occupied(_) => {
                        return Err(StoreError::AliasTaken(alias.to_string()));
                    }
                    MapEntry::Vacant(slot) => {
                        slot.insert(entry);
                    }
                }
                alias
            }
            None => {
                // The counter behind the generator is atomic and strictly
                // increasing, so this path needs no existence check.
                let key: ShortKey = self.generator.generate().into();
                self.entries.insert(key.as_str().to_owned(), entry);
                key
            }
        };

        debug!(key = %key, "shortened url");
        Ok(self.short_url(key.as_str()))
    }

    async fn resolve(&self, short_url: &str) -> Result<String> {
        let key = ShortKey::parse(&self.settings.base_url, short_url);

        let Some(entry) = self.entries.get(key.as_str()) else {
            return Err(StoreError::NotFound(key.to_string()));
        };

        if entry.is_expired(Timestamp::now()) {
            // Drop the read guard before evicting. The removal happens
            // before the error is returned, so a later lookup of this key
            // reports NotFound rather than Expired. The removal is
            // conditional: a concurrent resolver may have evicted this
            // entry already and a concurrent shorten may have re-claimed
            // the alias, and that fresh record must survive.
            drop(entry);
            self.entries
                .remove_if(key.as_str(), |_, entry| entry.is_expired(Timestamp::now()));
            debug!(key = %key, "evicted expired url");
            return Err(StoreError::Expired(key.to_string()));
        }

        entry.clicks.fetch_add(1, Ordering::SeqCst);
        debug!(key = %key, "resolved url");
        Ok(entry.original_url.clone())
    }

    async fn stats(&self) -> Result<Vec<StatsEntry>> {
        let entries = self
            .entries
            .iter()
            .map(|item| StatsEntry {
                short_url: self.short_url(item.key()),
                clicks: item.clicks.load(Ordering::SeqCst),
                original_url: item.original_url.clone(),
                created_at: item.created_at,
                expires_at: item.expires_at,
            })
            .collect();
        Ok(entries)
    }
}
