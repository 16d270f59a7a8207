use typed_builder::TypedBuilder;

/// Base URL prepended to keys when composing short URLs.
pub const DEFAULT_BASE_URL: &str = "http://go.ly";

/// Days until expiry when the caller does not specify a TTL.
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// Configures a store instance.
#[derive(Debug, Clone, TypedBuilder)]
pub struct StoreSettings {
    /// Public base URL for composed short URLs. Also stripped from
    /// inputs to `resolve` to recover the bare key.
    #[builder(default = String::from(DEFAULT_BASE_URL), setter(into))]
    pub base_url: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
