use serde::{Deserialize, Serialize};

/// Body of `POST /query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Raw query text as it was at submission time
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Response of `POST /query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub result: QueryResult,
    /// Whole response served from the backend cache
    #[serde(default)]
    pub cached: bool,
}

/// Result of one submitted query across every engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Text shown in the main output box
    pub main_display: String,
    /// Per-engine results in backend order
    pub results: Vec<EngineResult>,
}

impl QueryResult {
    /// Looks up an engine result by name
    pub fn engine(&self, engine_name: &str) -> Option<&EngineResult> {
        self.results.iter().find(|r| r.engine_name == engine_name)
    }
}

/// Result reported by a single engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineResult {
    /// Engine identity; unique within a `QueryResult`
    #[serde(rename = "database")]
    pub engine_name: String,
    #[serde(rename = "version")]
    pub engine_version: String,
    pub latency_ms: f64,
    /// Advisory only; the backend decides caching
    #[serde(default)]
    pub cached: bool,
    pub outputs: Vec<OutputBlock>,
}

/// One titled output of an engine (query rows, an IR stage, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputBlock {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_query_response() {
        let json = r#"{
            "result": {
                "main_display": "id\n--\n1",
                "results": [
                    {
                        "database": "PostgreSQL",
                        "version": "17.0",
                        "latency_ms": 12.5,
                        "cached": true,
                        "outputs": [
                            {"title": "Query Results", "content": "1", "latency_ms": 3.0},
                            {"title": "RelAlg: Before Optimization", "content": "module {}"}
                        ]
                    }
                ]
            },
            "cached": true
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert!(response.cached);
        let engine = response.result.engine("PostgreSQL").unwrap();
        assert_eq!(engine.engine_version, "17.0");
        assert!(engine.cached);
        assert_eq!(engine.outputs.len(), 2);
        assert_eq!(engine.outputs[0].latency_ms, Some(3.0));
        assert_eq!(engine.outputs[1].latency_ms, None);
    }

    #[test]
    fn test_cached_flags_default_to_false() {
        let json = r#"{
            "result": {
                "main_display": "",
                "results": [
                    {"database": "pgx-lower", "version": "0.1.0", "latency_ms": 1, "outputs": []}
                ]
            }
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert!(!response.cached);
        assert!(!response.result.results[0].cached);
    }

    #[test]
    fn test_missing_result_is_rejected() {
        let json = r#"{"cached": false}"#;
        assert!(serde_json::from_str::<QueryResponse>(json).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(QueryRequest::new("SELECT 1")).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "SELECT 1" }));
    }
}
