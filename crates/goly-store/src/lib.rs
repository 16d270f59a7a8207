//! URL store implementation for the goly URL shortener.
//!
//! This crate provides the concurrent in-memory store that owns the
//! key-to-record mapping, TTL expiry, and click accounting. The store
//! trait and shared types live in `goly_core`.

pub mod memory;
pub mod settings;

pub use memory::InMemoryStore;
pub use settings::StoreSettings;
