//! Dashboard state: last-known-good statistics and chart geometry.

use crate::shared::api_utils::ApiError;
use contracts::dashboards::d100_performance::{LatencyPercentiles, PerformanceStat};
use std::collections::HashSet;

/// One horizontal bar of the percentile chart
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileBar {
    pub label: &'static str,
    pub value_ms: f64,
    /// Share of the full bar width, in percent
    pub width_pct: f64,
}

/// Bars for `min … max`. Widths are `value / max`, floored at
/// `min_width_pct` so tiny values stay visible; `max` is always 100 %.
pub fn percentile_bars(percentiles: &LatencyPercentiles, min_width_pct: f64) -> Vec<PercentileBar> {
    let max = percentiles.max;
    percentiles
        .labeled()
        .into_iter()
        .map(|(label, value_ms)| {
            let width_pct = if label == "max" {
                100.0
            } else if max > 0.0 {
                (value_ms * 100.0 / max).clamp(min_width_pct, 100.0)
            } else {
                min_width_pct
            };
            PercentileBar {
                label,
                value_ms,
                width_pct,
            }
        })
        .collect()
}

/// First bucket of every engine, in arrival order. The backend sends newest
/// buckets first, so this is the latest bucket per engine.
pub fn latest_per_engine(stats: &[PerformanceStat]) -> Vec<&PerformanceStat> {
    let mut seen = HashSet::new();
    stats
        .iter()
        .filter(|stat| seen.insert(stat.engine_name.clone()))
        .collect()
}

/// Buckets whose percentiles are negative or out of order
pub fn irregular_buckets(stats: &[PerformanceStat]) -> Vec<&PerformanceStat> {
    stats
        .iter()
        .filter(|stat| !stat.percentiles.is_monotonic())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceBoard {
    stats: Vec<PerformanceStat>,
    has_data: bool,
    visible: bool,
    consecutive_failures: u32,
}

impl Default for PerformanceBoard {
    fn default() -> Self {
        Self {
            stats: Vec::new(),
            has_data: false,
            visible: true,
            consecutive_failures: 0,
        }
    }
}

impl PerformanceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one poll. Success replaces the snapshot wholesale; failure keeps
    /// whatever was displayed before.
    pub fn apply_poll(&mut self, outcome: Result<Vec<PerformanceStat>, ApiError>) {
        match outcome {
            Ok(stats) => {
                for stat in irregular_buckets(&stats) {
                    log::warn!(
                        "Percentiles out of order for {} at {}",
                        stat.engine_name,
                        stat.hour_bucket
                    );
                }
                self.stats = stats;
                self.has_data = true;
                self.consecutive_failures = 0;
            }
            Err(err) => {
                self.consecutive_failures += 1;
                log::error!(
                    "Failed to poll performance stats ({} in a row): {}",
                    self.consecutive_failures,
                    err
                );
            }
        }
    }

    pub fn stats(&self) -> &[PerformanceStat] {
        &self.stats
    }

    pub fn latest_per_engine(&self) -> Vec<&PerformanceStat> {
        latest_per_engine(&self.stats)
    }

    /// True once any poll has succeeded
    pub fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Chart visibility; polling continues while hidden
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}
