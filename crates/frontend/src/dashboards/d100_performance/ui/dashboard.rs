use crate::dashboards::d100_performance::api;
use crate::dashboards::d100_performance::board::{percentile_bars, PerformanceBoard};
use crate::dashboards::d100_performance::poller::PollScope;
use crate::shared::config::config;
use crate::shared::date_utils::format_hour_bucket;
use crate::shared::icons::icon;
use contracts::dashboards::d100_performance::PerformanceStat;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Performance Dashboard component
///
/// Polls immediately on mount and then every `poll_interval_secs` until the
/// component is disposed. Hiding the chart does not stop polling.
#[component]
pub fn PerformanceDashboard() -> impl IntoView {
    let settings = &config().dashboard;
    let limit = settings.stats_limit;
    let min_bar_width_pct = settings.min_bar_width_pct;
    let period_ms = settings.poll_interval_secs.saturating_mul(1000);

    let board = RwSignal::new(PerformanceBoard::new());

    let poll = move || {
        log::debug!("Polling performance stats");
        spawn_local(async move {
            let outcome = api::get_performance_stats(limit).await;
            // The page may be gone by the time the response lands
            if board.try_update(|b| b.apply_poll(outcome)).is_none() {
                log::debug!("Stats poll finished after dashboard was disposed");
            }
        });
    };

    PollScope::start(poll, |tick| Interval::new(period_ms, tick)).bind_to_owner();

    let visible = Memo::new(move |_| board.with(|b| b.is_visible()));
    let has_data = Memo::new(move |_| board.with(|b| b.has_data()));
    let latest = Memo::new(move |_| {
        board.with(|b| {
            b.latest_per_engine()
                .into_iter()
                .cloned()
                .collect::<Vec<PerformanceStat>>()
        })
    });

    view! {
        <div class="perf-dashboard">
            <div
                class="perf-dashboard__header"
                on:click=move |_| board.update(|b| b.toggle_visible())
            >
                <div class="perf-dashboard__title">
                    {icon("activity")}
                    <h3>"Performance Dashboard"</h3>
                </div>
                <span class="perf-dashboard__toggle">
                    {move || if visible.get() { icon("chevron-down") } else { icon("chevron-right") }}
                </span>
            </div>

            <Show when=move || visible.get()>
                {move || {
                    if !has_data.get() {
                        view! {
                            <div class="perf-dashboard__placeholder">"Loading statistics..."</div>
                        }.into_any()
                    } else if latest.with(|l| l.is_empty()) {
                        view! {
                            <div class="perf-dashboard__placeholder">"No queries recorded yet"</div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="perf-dashboard__cards">
                                {latest
                                    .get()
                                    .into_iter()
                                    .map(|stat| view! {
                                        <EngineStatCard stat=stat min_bar_width_pct=min_bar_width_pct />
                                    })
                                    .collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}

/// Latest bucket of one engine as a percentile bar chart
#[component]
fn EngineStatCard(stat: PerformanceStat, min_bar_width_pct: f64) -> impl IntoView {
    let bars = percentile_bars(&stat.percentiles, min_bar_width_pct);

    view! {
        <div class="perf-card">
            <div class="perf-card__header">
                <span class="perf-card__engine">{stat.engine_name}</span>
                <span class="perf-card__bucket">{format_hour_bucket(&stat.hour_bucket)}</span>
            </div>
            <div class="perf-card__summary">
                <span>{format!("{} queries", stat.query_count)}</span>
                <span>{format!("{} unique", stat.unique_query_count)}</span>
                <span>{format!("mean {:.1}ms", stat.mean_latency_ms)}</span>
            </div>
            <div class="perf-card__bars">
                {bars
                    .into_iter()
                    .map(|bar| view! {
                        <div class="perf-bar">
                            <span class="perf-bar__label">{bar.label}</span>
                            <div class="perf-bar__track">
                                <div
                                    class="perf-bar__fill"
                                    class:perf-bar__fill--max={bar.label == "max"}
                                    style:width={format!("{}%", bar.width_pct)}
                                ></div>
                            </div>
                            <span class="perf-bar__value">{format!("{:.1}ms", bar.value_ms)}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
