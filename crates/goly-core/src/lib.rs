//! Core types and traits for the goly URL shortener.
//!
//! This crate provides the shared vocabulary used by the key generator,
//! the store implementation, and the CLI shell.

pub mod error;
pub mod key;
pub mod store;

pub use error::{Result, StoreError};
pub use key::ShortKey;
pub use store::{ShortenParams, StatsEntry, UrlStore};
