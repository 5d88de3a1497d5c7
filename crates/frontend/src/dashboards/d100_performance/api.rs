use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::dashboards::d100_performance::{
    PerformanceStat, PerformanceStatsQuery, PerformanceStatsResponse,
};

/// Fetch the `limit` most recent aggregated buckets across all engines
pub async fn get_performance_stats(limit: u32) -> Result<Vec<PerformanceStat>, ApiError> {
    let response: PerformanceStatsResponse = get_json(&api_url(&stats_path(limit))).await?;
    Ok(response.stats)
}

pub fn stats_path(limit: u32) -> String {
    let query = serde_qs::to_string(&PerformanceStatsQuery { limit })
        .unwrap_or_else(|_| format!("limit={}", limit));
    format!("/stats/performance?{}", query)
}
