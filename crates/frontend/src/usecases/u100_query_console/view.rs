//! Query Console - View Component
//!
//! Editor, preset buttons, main output and the per-engine result tree, with
//! the performance dashboard on top.

use super::model::preset_ids;
use super::view_model::{
    output_panel_id, QueryConsoleVm, EDITOR_PANEL, MAIN_OUTPUT_PANEL,
};
use crate::dashboards::d100_performance::ui::PerformanceDashboard;
use crate::shared::components::resize_handle::{install_resize_listeners, ResizeHandle};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::usecases::u100_query_console::{EngineResult, OutputBlock};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn QueryConsole() -> impl IntoView {
    let vm = QueryConsoleVm::new();
    install_resize_listeners(vm.panels);

    let layout = &config().layout;
    let line_height = layout.line_height_px;
    let max_lines = layout.max_default_lines;
    let editor_default = layout.editor_height_px;
    let editor_min = layout.editor_min_height_px;
    let panel_min = layout.panel_min_height_px;

    // Narrow views of the workflow so typing does not rebuild the result tree
    // Results only change on success, which bumps the generation
    let generation = Memo::new(move |_| vm.workflow.with(|wf| wf.generation()));
    let result = Memo::new(move |_| {
        generation.track();
        vm.workflow.with_untracked(|wf| wf.result().cloned())
    });
    let cached = Memo::new(move |_| vm.workflow.with(|wf| wf.cached()));
    let last_error = Memo::new(move |_| vm.workflow.with(|wf| wf.last_error().map(str::to_string)));
    let query_text = Memo::new(move |_| vm.workflow.with(|wf| wf.query_text().to_string()));
    let is_executing = vm.is_executing();

    let editor_height = Signal::derive(move || {
        vm.panels.with(|p| p.height_or(EDITOR_PANEL, editor_default))
    });
    let main_height = Signal::derive(move || {
        let content = result.with(|r| r.as_ref().map(|r| r.main_display.clone()).unwrap_or_default());
        vm.panels
            .with(|p| p.resolved_height(MAIN_OUTPUT_PANEL, &content, line_height, max_lines))
    });

    view! {
        <PageFrame page_id="u100_query_console--usecase" category=PAGE_CAT_USECASE>
            <PerformanceDashboard />

            <div class="query-console__editor">
                <div class="page__header">
                    <h2 class="page__title">"SQL Query"</h2>
                </div>

                <div class="query-console__presets">
                    <span class="query-console__presets-label">"TPC-H Queries:"</span>
                    <div class="query-console__presets-buttons">
                        {preset_ids()
                            .map(|preset| {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| vm.load_preset_command(preset)
                                    >
                                        {format!("Q{}", preset)}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="resizable-container">
                    <textarea
                        class="query-console__textarea"
                        spellcheck="false"
                        prop:value=move || query_text.get()
                        on:input=move |ev| vm.set_query_text(event_target_value(&ev))
                        style:height=move || format!("{}px", editor_height.get())
                    ></textarea>
                    <ResizeHandle
                        panel_id=EDITOR_PANEL
                        panels=vm.panels
                        current_height=editor_height
                        min_height=editor_min
                    />
                </div>

                <div class="query-console__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.execute_command()
                        disabled=is_executing
                    >
                        {icon("play")}
                        {move || if is_executing.get() { " Executing..." } else { " Execute Query" }}
                    </Button>
                    {move || is_executing.get().then(|| view! { <Spinner /> })}
                    <span class="query-console__hint">
                        "Drag the bottom edge of any box to resize it"
                    </span>
                </div>

                {move || last_error.get().map(|msg| view! {
                    <div class="alert alert--error">
                        <strong>"Query failed: "</strong>
                        {msg}
                    </div>
                })}
            </div>

            {move || result.get().map(|res| {
                let engines = res.results;
                view! {
                    <div class="query-console__output">
                        <div class="query-console__output-header">
                            <h3>"Output"</h3>
                            {move || cached.get().then(|| view! {
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                    {icon("zap")}
                                    " cached"
                                </Badge>
                            })}
                        </div>
                        <div class="resizable-container">
                            <textarea
                                class="query-console__main-display"
                                readonly=true
                                prop:value=res.main_display
                                style:height=move || format!("{}px", main_height.get())
                            ></textarea>
                            <ResizeHandle
                                panel_id=MAIN_OUTPUT_PANEL
                                panels=vm.panels
                                current_height=main_height
                                min_height=panel_min
                            />
                        </div>
                    </div>

                    <div class="query-console__engines">
                        {engines
                            .into_iter()
                            .map(|engine| view! { <EngineResultBlock engine=engine vm=vm /> })
                            .collect_view()}
                    </div>
                }
            })}
        </PageFrame>
    }
}

/// One collapsible engine node of the result tree
#[component]
#[allow(non_snake_case)]
fn EngineResultBlock(engine: EngineResult, vm: QueryConsoleVm) -> impl IntoView {
    let EngineResult {
        engine_name,
        engine_version,
        latency_ms,
        cached,
        outputs,
    } = engine;

    let name_for_check = engine_name.clone();
    let expanded = move || vm.disclosure.with(|d| d.is_expanded(&name_for_check));
    let name_for_toggle = engine_name.clone();
    let name_for_outputs = engine_name.clone();

    view! {
        <div class="engine-result">
            <div
                class="engine-result__header"
                on:click=move |_| vm.toggle_engine(&name_for_toggle)
            >
                <div class="engine-result__title">
                    {icon("database")}
                    <span class="engine-result__name">
                        {format!("{} | {}", engine_name, engine_version)}
                    </span>
                    {cached.then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            "cached"
                        </Badge>
                    })}
                </div>
                <div class="engine-result__meta">
                    <span class="engine-result__latency">{format!("{}ms", latency_ms)}</span>
                    <span class="engine-result__icon">
                        {
                            let expanded = expanded.clone();
                            move || if expanded() { icon("chevron-down") } else { icon("chevron-right") }
                        }
                    </span>
                </div>
            </div>

            {move || expanded().then(|| {
                let engine_name = name_for_outputs.clone();
                view! {
                    <div class="engine-result__outputs">
                        {outputs
                            .clone()
                            .into_iter()
                            .enumerate()
                            .map(|(index, output)| {
                                let panel_id = output_panel_id(&engine_name, index);
                                view! { <OutputBlockView output=output panel_id=panel_id vm=vm /> }
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn OutputBlockView(output: OutputBlock, panel_id: String, vm: QueryConsoleVm) -> impl IntoView {
    let layout = &config().layout;
    let line_height = layout.line_height_px;
    let max_lines = layout.max_default_lines;
    let panel_min = layout.panel_min_height_px;

    let OutputBlock {
        title,
        content,
        latency_ms,
    } = output;

    let height = {
        let panel_id = panel_id.clone();
        let content = content.clone();
        Signal::derive(move || {
            vm.panels
                .with(|p| p.resolved_height(&panel_id, &content, line_height, max_lines))
        })
    };

    view! {
        <div class="output-block">
            <div class="output-block__header">
                <span class="output-block__title">{title}</span>
                {latency_ms.map(|ms| view! {
                    <span class="output-block__latency">{format!("{}ms", ms)}</span>
                })}
            </div>
            <div class="resizable-container">
                <textarea
                    class="output-block__content"
                    readonly=true
                    prop:value=content
                    style:height=move || format!("{}px", height.get())
                ></textarea>
                <ResizeHandle
                    panel_id=panel_id
                    panels=vm.panels
                    current_height=height
                    min_height=panel_min
                />
            </div>
        </div>
    }
}
