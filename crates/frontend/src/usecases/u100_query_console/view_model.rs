use super::model;
use super::workflow::QueryWorkflow;
use crate::shared::config::config;
use crate::shared::disclosure::DisclosureStore;
use crate::shared::layout_engine::PanelSizes;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const EDITOR_PANEL: &str = "editor";
pub const MAIN_OUTPUT_PANEL: &str = "main-output";
/// Per-output panels are recreated on every successful execution
pub const OUTPUT_PANEL_PREFIX: &str = "output/";

pub fn output_panel_id(engine_name: &str, index: usize) -> String {
    format!("{}{}/{}", OUTPUT_PANEL_PREFIX, engine_name, index)
}

/// ViewModel for the query console page.
///
/// The disclosure store and panel sizes live as long as the page, so expand
/// state and manual heights survive re-running a query.
#[derive(Clone, Copy)]
pub struct QueryConsoleVm {
    pub workflow: RwSignal<QueryWorkflow>,
    pub disclosure: RwSignal<DisclosureStore>,
    pub panels: RwSignal<PanelSizes>,
}

impl QueryConsoleVm {
    pub fn new() -> Self {
        Self {
            workflow: RwSignal::new(QueryWorkflow::new(config().query.initial_text.clone())),
            disclosure: RwSignal::new(DisclosureStore::new()),
            panels: RwSignal::new(PanelSizes::new()),
        }
    }

    pub fn is_executing(&self) -> Signal<bool> {
        let workflow = self.workflow;
        Signal::derive(move || workflow.with(|wf| wf.is_executing()))
    }

    pub fn set_query_text(&self, text: String) {
        self.workflow.update(|wf| wf.set_query_text(text));
    }

    /// Run the pending query. Ignored while an execution is in flight,
    /// whatever control triggered it.
    pub fn execute_command(&self) {
        let Some(request) = self.workflow.try_update(|wf| wf.begin_execute()).flatten() else {
            log::debug!("Execute ignored: query already running");
            return;
        };

        let workflow = self.workflow;
        let panels = self.panels;
        spawn_local(async move {
            let outcome = model::execute_query(&request).await;
            let succeeded = outcome.is_ok();
            workflow.try_update(|wf| wf.finish_execute(outcome));
            if succeeded {
                panels.try_update(|p| p.forget_prefix(OUTPUT_PANEL_PREFIX));
            }
        });
    }

    /// Replace the pending text with preset `preset`
    pub fn load_preset_command(&self, preset: u32) {
        if !model::is_known_preset(preset) {
            log::warn!("Unknown preset query {}", preset);
            return;
        }

        let workflow = self.workflow;
        spawn_local(async move {
            let outcome = model::fetch_preset(preset).await;
            workflow.try_update(|wf| wf.apply_preset(preset, outcome));
        });
    }

    pub fn toggle_engine(&self, engine_name: &str) {
        self.disclosure.update(|d| d.toggle(engine_name));
    }

    pub fn is_engine_expanded(&self, engine_name: &str) -> bool {
        self.disclosure.with(|d| d.is_expanded(engine_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_panel_ids() {
        let id = output_panel_id("pgx-lower", 2);
        assert_eq!(id, "output/pgx-lower/2");
        assert!(id.starts_with(OUTPUT_PANEL_PREFIX));
        assert!(!EDITOR_PANEL.starts_with(OUTPUT_PANEL_PREFIX));
        assert!(!MAIN_OUTPUT_PANEL.starts_with(OUTPUT_PANEL_PREFIX));
    }
}
