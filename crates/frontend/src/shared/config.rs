//! Console configuration.
//!
//! Defaults are embedded as TOML and parsed once per page load. The backend
//! base URL may be overridden at build time through `CONSOLE_API_URL`.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub query: QueryConfig,
    pub layout: LayoutConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute base URL; when absent the page origin plus `path_prefix` is used
    #[serde(default)]
    pub base_url_override: Option<String>,
    pub path_prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QueryConfig {
    pub initial_text: String,
    /// Presets are numbered `1..=preset_count`
    pub preset_count: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LayoutConfig {
    pub line_height_px: f64,
    /// Content-derived heights never exceed this many lines
    pub max_default_lines: usize,
    pub editor_height_px: f64,
    pub editor_min_height_px: f64,
    pub panel_min_height_px: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub poll_interval_secs: u32,
    pub stats_limit: u32,
    pub min_bar_width_pct: f64,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
path_prefix = "/api"

[query]
initial_text = "-- Select a TPC-H query or write your own"
preset_count = 22

[layout]
line_height_px = 20.0
max_default_lines = 100
editor_height_px = 250.0
editor_min_height_px = 150.0
panel_min_height_px = 100.0

[dashboard]
poll_interval_secs = 60
stats_limit = 24
min_bar_width_pct = 5.0
"#;

/// Build-time override of the backend base URL
const API_URL_ENV: Option<&str> = option_env!("CONSOLE_API_URL");

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url_override: None,
                path_prefix: "/api".to_string(),
            },
            query: QueryConfig {
                initial_text: "-- Select a TPC-H query or write your own".to_string(),
                preset_count: 22,
            },
            layout: LayoutConfig {
                line_height_px: 20.0,
                max_default_lines: 100,
                editor_height_px: 250.0,
                editor_min_height_px: 150.0,
                panel_min_height_px: 100.0,
            },
            dashboard: DashboardConfig {
                poll_interval_secs: 60,
                stats_limit: 24,
                min_bar_width_pct: 5.0,
            },
        }
    }
}

/// Normalized base URL override: blank means none, trailing `/` is dropped
fn normalize_override(api_url: Option<&str>) -> Option<String> {
    api_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
}

/// Parse a TOML document and apply the optional base URL override.
pub fn parse_config(source: &str, api_url: Option<&str>) -> Result<ConsoleConfig, toml::de::Error> {
    let mut config: ConsoleConfig = toml::from_str(source)?;
    if let Some(url) = normalize_override(api_url) {
        config.api.base_url_override = Some(url);
    }
    Ok(config)
}

/// Parse `source`, falling back to defaults (with the same override) on error.
fn load_from(source: &str, api_url: Option<&str>) -> ConsoleConfig {
    match parse_config(source, api_url) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Embedded console config is invalid, using defaults: {}", err);
            let mut config = ConsoleConfig::default();
            config.api.base_url_override = normalize_override(api_url);
            config
        }
    }
}

/// Load the embedded configuration, falling back to defaults on a parse error.
pub fn load_config() -> ConsoleConfig {
    load_from(DEFAULT_CONFIG, API_URL_ENV)
}

static CONFIG: Lazy<ConsoleConfig> = Lazy::new(load_config);

/// Process-wide configuration, resolved on first use
pub fn config() -> &'static ConsoleConfig {
    &CONFIG
}
