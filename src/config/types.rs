use serde::{Deserialize, Serialize};

/// Public endpoint serving the content catalog.
pub const DEFAULT_SOURCE_URL: &str = "https://closet-recruiting-api.azurewebsites.net/api/data";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub filters: FilterDefaults,
}

/// Where the catalog is fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Absolute URL returning a JSON array of item records.
    #[serde(default = "default_source_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Incremental rendering of the derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items revealed per page (default: 12).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Delay before a "load more" request applies, in milliseconds (default: 500).
    #[serde(default = "default_load_more_delay_ms")]
    pub load_more_delay_ms: u64,
}

/// Initial price range and slider bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefaults {
    #[serde(default = "default_price_min")]
    pub price_min: u32,
    #[serde(default = "default_price_max")]
    pub price_max: u32,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    12
}

fn default_load_more_delay_ms() -> u64 {
    500
}

fn default_price_min() -> u32 {
    0
}

fn default_price_max() -> u32 {
    999
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            load_more_delay_ms: default_load_more_delay_ms(),
        }
    }
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            price_min: default_price_min(),
            price_max: default_price_max(),
        }
    }
}
