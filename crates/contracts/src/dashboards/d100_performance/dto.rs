use serde::{Deserialize, Serialize};

/// Query string of `GET /stats/performance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceStatsQuery {
    /// Number of most recent buckets to return across all engines
    pub limit: u32,
}

/// Response of `GET /stats/performance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStatsResponse {
    /// Buckets ordered newest first
    pub stats: Vec<PerformanceStat>,
}

/// Latency aggregate of one engine over one hour bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStat {
    #[serde(rename = "engine", alias = "database")]
    pub engine_name: String,
    /// Bucket label, usually an ISO timestamp truncated to the hour
    pub hour_bucket: String,
    pub query_count: u64,
    pub unique_query_count: u64,
    pub percentiles: LatencyPercentiles,
    pub mean_latency_ms: f64,
}

/// Latency distribution in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatencyPercentiles {
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
    pub p99: f64,
    pub max: f64,
}

impl LatencyPercentiles {
    /// Values paired with their labels, smallest percentile first
    pub fn labeled(&self) -> [(&'static str, f64); 7] {
        [
            ("min", self.min),
            ("p25", self.p25),
            ("p50", self.p50),
            ("p75", self.p75),
            ("p95", self.p95),
            ("p99", self.p99),
            ("max", self.max),
        ]
    }

    /// True when every value is non-negative and the sequence never decreases
    pub fn is_monotonic(&self) -> bool {
        let values = self.labeled();
        values[0].1 >= 0.0 && values.windows(2).all(|pair| pair[0].1 <= pair[1].1)
    }
}
