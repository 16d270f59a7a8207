use crate::error::StoreError;
use smol_str::SmolStr;
use std::fmt::Display;

/// A short key identifying a stored URL mapping.
///
/// Custom keys must be 3-32 characters long and contain only
/// alphanumeric characters, hyphens, or underscores. Generated keys
/// come from the counter-backed generator and skip validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShortKey {
    /// A system-generated key (base62-encoded counter value).
    Generated(SmolStr),
    /// A caller-provided custom alias.
    Custom(String),
}

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 32;

impl ShortKey {
    /// Creates a `ShortKey` from a trusted generator output.
    ///
    /// Generated keys are drawn from the base62 alphabet by construction,
    /// so no validation is performed.
    pub fn generated(key: impl AsRef<str>) -> Self {
        Self::Generated(SmolStr::new(key))
    }

    /// Creates a custom `ShortKey` after validating the input.
    ///
    /// Valid keys are 3-32 characters and contain only `[a-zA-Z0-9_-]`.
    pub fn new(key: impl Into<String>) -> std::result::Result<Self, StoreError> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self::Custom(key))
    }

    /// Creates a `ShortKey` without validation.
    ///
    /// Use this only for keys produced by trusted internal sources,
    /// e.g. when re-deriving the key from a short URL during resolve.
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self::Custom(key.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Extracts the key from a short URL by stripping the base URL prefix.
    ///
    /// If the input does not start with the base URL, the whole input is
    /// treated as the key. Lookups are by literal key string either way.
    pub fn parse(base_url: &str, input: &str) -> Self {
        let prefix = format!("{}/", base_url.trim_end_matches('/'));
        let key = input.strip_prefix(&prefix).unwrap_or(input);
        Self::new_unchecked(key)
    }

    /// Returns the short key as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShortKey::Generated(s) => s.as_str(),
            ShortKey::Custom(s) => s.as_str(),
        }
    }

    fn validate(key: &str) -> std::result::Result<(), StoreError> {
        if key.len() < MIN_LENGTH || key.len() > MAX_LENGTH {
            return Err(StoreError::InvalidKey(format!(
                "alias must be {} to {} characters, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                key.len()
            )));
        }

        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StoreError::InvalidKey(format!(
                "alias may only contain alphanumeric characters, hyphens, or underscores: '{}'",
                key
            )));
        }

        Ok(())
    }
}

impl Display for ShortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys() {
        assert!(ShortKey::new("abc").is_ok());
        assert!(ShortKey::new("Abc-123_xyz").is_ok());
        assert!(ShortKey::new("a".repeat(32)).is_ok());
    }

    #[test]
    fn too_short() {
        assert!(ShortKey::new("ab").is_err());
        assert!(ShortKey::new("").is_err());
    }

    #[test]
    fn too_long() {
        assert!(ShortKey::new("a".repeat(33)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortKey::new("abc def").is_err());
        assert!(ShortKey::new("abc/def").is_err());
        assert!(ShortKey::new("abc!def").is_err());
    }

    #[test]
    fn validation_errors_name_the_alias() {
        let err = ShortKey::new("ab").unwrap_err();
        assert!(err.to_string().contains("alias"));

        let err = ShortKey::new("abc def").unwrap_err();
        assert!(err.to_string().contains("alias"));
    }

    #[test]
    fn display_custom() {
        let key = ShortKey::new("my-key").unwrap();
        assert_eq!(key.to_string(), "my-key");
    }

    #[test]
    fn display_generated() {
        let key = ShortKey::generated("clvXwH");
        assert_eq!(key.to_string(), "clvXwH");
    }

    #[test]
    fn to_url_handles_trailing_slash() {
        let key = ShortKey::new("abc123").unwrap();
        assert_eq!(key.to_url("http://go.ly"), "http://go.ly/abc123");
        assert_eq!(key.to_url("http://go.ly/"), "http://go.ly/abc123");
    }

    #[test]
    fn parse_strips_base_url() {
        let key = ShortKey::parse("http://go.ly", "http://go.ly/promo");
        assert_eq!(key.as_str(), "promo");
    }

    #[test]
    fn parse_falls_back_to_whole_input() {
        // No base prefix present: the entire input is the key.
        let key = ShortKey::parse("http://go.ly", "promo");
        assert_eq!(key.as_str(), "promo");
    }
}
