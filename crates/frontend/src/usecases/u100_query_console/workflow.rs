//! Query execution state machine.
//!
//! ```text
//! Idle ──begin_execute──▶ Executing ──finish_execute(Ok)──▶ Succeeded
//!   ▲                         │                                 │
//!   │                         └──finish_execute(Err)──▶ Failed  │
//!   └────────────── next begin_execute accepted ◀───────────────┘
//! ```
//!
//! Only `Executing` rejects `begin_execute`; `Succeeded` and `Failed` behave
//! like `Idle` for the next execution. The machine performs no I/O.

use crate::shared::api_utils::ApiError;
use contracts::usecases::u100_query_console::{QueryRequest, QueryResponse, QueryResult};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    Executing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryWorkflow {
    query_text: String,
    phase: QueryPhase,
    result: Option<QueryResult>,
    cached: bool,
    last_error: Option<String>,
    /// Incremented on every successful execution and on nothing else
    generation: u64,
}

impl QueryWorkflow {
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            query_text: initial_text.into(),
            phase: QueryPhase::Idle,
            result: None,
            cached: false,
            last_error: None,
            generation: 0,
        }
    }

    /// Update the pending text. Never touches an execution in flight.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    /// Enter `Executing` and return the request to send, or `None` when an
    /// execution is already in flight.
    pub fn begin_execute(&mut self) -> Option<QueryRequest> {
        if self.phase == QueryPhase::Executing {
            return None;
        }
        self.phase = QueryPhase::Executing;
        self.last_error = None;
        Some(QueryRequest::new(self.query_text.clone()))
    }

    /// Apply the outcome of the in-flight execution. Outcomes arriving while
    /// nothing is executing are ignored.
    pub fn finish_execute(&mut self, outcome: Result<QueryResponse, ApiError>) {
        if self.phase != QueryPhase::Executing {
            log::warn!("Ignoring query outcome with no execution in flight");
            return;
        }
        match outcome {
            Ok(response) => {
                self.result = Some(dedupe_engines(response.result));
                self.cached = response.cached;
                self.generation += 1;
                self.phase = QueryPhase::Succeeded;
            }
            Err(err) => {
                log::error!("Failed to execute query: {}", err);
                self.last_error = Some(err.to_string());
                self.phase = QueryPhase::Failed;
            }
        }
    }

    /// Apply a fetched preset body. Failures leave the pending text unchanged.
    /// Returns true when the text was replaced.
    pub fn apply_preset(&mut self, preset: u32, outcome: Result<String, ApiError>) -> bool {
        match outcome {
            Ok(sql) => {
                self.query_text = sql;
                true
            }
            Err(err) => {
                log::error!("Failed to load query {}: {}", preset, err);
                false
            }
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    pub fn is_executing(&self) -> bool {
        self.phase == QueryPhase::Executing
    }

    /// Latest successful result; `None` means no result yet
    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    /// Top-level cache flag of the latest successful result
    pub fn cached(&self) -> bool {
        self.result.is_some() && self.cached
    }

    /// Failure of the latest execution, cleared when the next one starts
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Keep the first result of each engine name; later duplicates are dropped.
fn dedupe_engines(mut result: QueryResult) -> QueryResult {
    let mut seen = HashSet::new();
    result.results.retain(|engine| {
        let first = seen.insert(engine.engine_name.clone());
        if !first {
            log::warn!(
                "Dropping duplicate result for engine '{}'",
                engine.engine_name
            );
        }
        first
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u100_query_console::{EngineResult, OutputBlock};

    fn engine(name: &str, cached: bool, content: &str) -> EngineResult {
        EngineResult {
            engine_name: name.to_string(),
            engine_version: "1.0".to_string(),
            latency_ms: 10.0,
            cached,
            outputs: vec![OutputBlock {
                title: "Query Results".to_string(),
                content: content.to_string(),
                latency_ms: None,
            }],
        }
    }

    fn response(main: &str, cached: bool, engines: Vec<EngineResult>) -> QueryResponse {
        QueryResponse {
            result: QueryResult {
                main_display: main.to_string(),
                results: engines,
            },
            cached,
        }
    }

    #[test]
    fn test_starts_idle_without_result() {
        let wf = QueryWorkflow::new("-- pick a query");
        assert_eq!(wf.phase(), QueryPhase::Idle);
        assert!(wf.result().is_none());
        assert!(!wf.cached());
        assert_eq!(wf.query_text(), "-- pick a query");
    }

    #[test]
    fn test_reentrant_execute_is_ignored() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        let mut sent = Vec::new();

        if let Some(req) = wf.begin_execute() {
            sent.push(req);
        }
        if let Some(req) = wf.begin_execute() {
            sent.push(req);
        }

        assert_eq!(sent, vec![QueryRequest::new("SELECT 1")]);
        assert!(wf.is_executing());

        wf.finish_execute(Ok(response("1", false, vec![])));
        assert_eq!(wf.phase(), QueryPhase::Succeeded);
        assert_eq!(wf.generation(), 1);

        // A second outcome for the same execution is not applied
        wf.finish_execute(Ok(response("2", false, vec![])));
        assert_eq!(wf.result().unwrap().main_display, "1");
        assert_eq!(wf.generation(), 1);
    }

    #[test]
    fn test_text_edits_do_not_change_in_flight_request() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        let req = wf.begin_execute().unwrap();
        wf.set_query_text("SELECT 2");
        assert_eq!(req.query, "SELECT 1");
        assert_eq!(wf.query_text(), "SELECT 2");
        assert!(wf.is_executing());
    }

    #[test]
    fn test_generation_only_moves_on_success() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        wf.begin_execute().unwrap();
        wf.finish_execute(Ok(response("one", false, vec![])));
        assert_eq!(wf.generation(), 1);

        // Typing, presets and failures leave the displayed result untouched
        wf.set_query_text("SELECT 2");
        wf.apply_preset(4, Ok("select 4".into()));
        wf.begin_execute().unwrap();
        wf.set_query_text("SELECT 3");
        wf.finish_execute(Err(ApiError::Network("offline".into())));
        assert_eq!(wf.generation(), 1);
        assert_eq!(wf.result().unwrap().main_display, "one");

        wf.begin_execute().unwrap();
        wf.finish_execute(Ok(response("two", false, vec![])));
        assert_eq!(wf.generation(), 2);
    }

    #[test]
    fn test_cached_badge_and_wholesale_replacement() {
        let mut wf = QueryWorkflow::new("SELECT 1");

        wf.begin_execute().unwrap();
        wf.finish_execute(Ok(response(
            "first",
            true,
            vec![engine("PostgreSQL", true, "a"), engine("pgx-lower", true, "b")],
        )));
        assert!(wf.cached());
        assert_eq!(wf.result().unwrap().results.len(), 2);

        wf.begin_execute().unwrap();
        wf.finish_execute(Ok(response(
            "second",
            false,
            vec![engine("pgx-lower", false, "c")],
        )));
        assert!(!wf.cached());
        let result = wf.result().unwrap();
        assert_eq!(result.main_display, "second");
        assert_eq!(result.results.len(), 1);
        assert!(result.engine("PostgreSQL").is_none());
        assert_eq!(result.engine("pgx-lower").unwrap().outputs[0].content, "c");
    }

    #[test]
    fn test_failure_keeps_prior_result() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        wf.begin_execute().unwrap();
        wf.finish_execute(Ok(response("ok", false, vec![engine("pg", false, "x")])));

        wf.begin_execute().unwrap();
        wf.finish_execute(Err(ApiError::Status(500)));

        assert_eq!(wf.phase(), QueryPhase::Failed);
        assert_eq!(wf.result().unwrap().main_display, "ok");
        assert_eq!(wf.last_error(), Some("HTTP error: 500"));
        assert_eq!(wf.generation(), 1);

        // Failed behaves like Idle; the banner clears on the next attempt
        assert!(wf.begin_execute().is_some());
        assert_eq!(wf.last_error(), None);
    }

    #[test]
    fn test_failure_without_prior_result_is_distinct_from_no_result() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        wf.begin_execute().unwrap();
        wf.finish_execute(Err(ApiError::Malformed("missing field `result`".into())));
        assert!(wf.result().is_none());
        assert!(wf.last_error().is_some());
    }

    #[test]
    fn test_duplicate_engines_keep_first() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        wf.begin_execute().unwrap();
        wf.finish_execute(Ok(response(
            "dup",
            false,
            vec![
                engine("pg", false, "first"),
                engine("duck", false, "other"),
                engine("pg", true, "second"),
            ],
        )));

        let result = wf.result().unwrap();
        let names: Vec<&str> = result.results.iter().map(|r| r.engine_name.as_str()).collect();
        assert_eq!(names, vec!["pg", "duck"]);
        assert_eq!(result.engine("pg").unwrap().outputs[0].content, "first");
    }

    #[test]
    fn test_preset_failure_leaves_text() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        assert!(!wf.apply_preset(3, Err(ApiError::Network("offline".into()))));
        assert_eq!(wf.query_text(), "SELECT 1");

        assert!(wf.apply_preset(3, Ok("select * from lineitem".into())));
        assert_eq!(wf.query_text(), "select * from lineitem");
    }

    #[test]
    fn test_preset_does_not_affect_execution() {
        let mut wf = QueryWorkflow::new("SELECT 1");
        let req = wf.begin_execute().unwrap();
        wf.apply_preset(1, Ok("select 42".into()));
        assert!(wf.is_executing());
        assert_eq!(req.query, "SELECT 1");
    }
}
