//! App Configuration
//!
//! Compile-time settings shared by the fetcher, the owned store and the UI.

/// PokeAPI list endpoint
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Number of catalog entries (ids 1..=N)
pub const CATALOG_SIZE: u32 = 1051;

/// Detail requests issued concurrently per batch
pub const BATCH_SIZE: usize = 20;

/// localStorage slot for the owned id list
pub const STORAGE_KEY: &str = "dex-tracker.owned";

/// Query parameter carrying the share token
pub const SHARE_PARAM: &str = "ids";

/// How long the "Link copied" confirmation stays visible
pub const COPY_CONFIRM_MS: u32 = 2_000;

/// Settings provided to components via context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: &'static str,
    pub catalog_size: u32,
    pub batch_size: usize,
    pub storage_key: &'static str,
    pub share_param: &'static str,
    pub copy_confirm_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL,
            catalog_size: CATALOG_SIZE,
            batch_size: BATCH_SIZE,
            storage_key: STORAGE_KEY,
            share_param: SHARE_PARAM,
            copy_confirm_ms: COPY_CONFIRM_MS,
        }
    }
}

impl AppConfig {
    /// URL of the list request: `<base>?limit=N`
    pub fn list_url(&self) -> String {
        format!("{}?limit={}", self.api_base_url, self.catalog_size)
    }
}
