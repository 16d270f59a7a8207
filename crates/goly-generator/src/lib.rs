//! Short key generation for the goly URL shortener.
//!
//! This crate provides the base62 encoding primitive and the
//! counter-backed sequential generator used for auto-assigned keys.

pub mod base62;
pub mod seq;

pub use seq::SeqGenerator;

use goly_core::ShortKey;

/// Trait for generating short keys.
///
/// Implementations are pure generators that don't interact with storage.
/// The generator, not the store, is responsible for ensuring uniqueness
/// of the keys it produces.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortKey>;

    /// Generates a type that can be converted into a globally unique short key.
    fn generate(&self) -> Self::Output;
}
