//! Query Console - Model Layer
//!
//! Backend calls used by the console

use crate::shared::api_utils::{api_url, get_text, post_json, ApiError};
use crate::shared::config::config;
use contracts::usecases::u100_query_console::{QueryRequest, QueryResponse};

/// Submit query text to every engine
pub async fn execute_query(request: &QueryRequest) -> Result<QueryResponse, ApiError> {
    post_json(&api_url("/query"), request).await
}

/// Fetch the body of preset query `preset`
pub async fn fetch_preset(preset: u32) -> Result<String, ApiError> {
    get_text(&api_url(&preset_path(preset))).await
}

pub fn preset_path(preset: u32) -> String {
    format!("/resources/{}.sql", preset)
}

/// Preset ids offered by the console
pub fn preset_ids() -> impl Iterator<Item = u32> {
    1..=config().query.preset_count
}

pub fn is_known_preset(preset: u32) -> bool {
    (1..=config().query.preset_count).contains(&preset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_path() {
        assert_eq!(preset_path(1), "/resources/1.sql");
        assert_eq!(preset_path(22), "/resources/22.sql");
    }

    #[test]
    fn test_known_presets() {
        assert_eq!(preset_ids().count(), 22);
        assert!(is_known_preset(1));
        assert!(is_known_preset(22));
        assert!(!is_known_preset(0));
        assert!(!is_known_preset(23));
    }
}
