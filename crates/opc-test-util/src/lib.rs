//! Shared test utilities for the opc workspace.
//!
//! Everything here is deterministic and IO-free apart from the fixture path helpers.

use opc_engine::PolicyEvaluator;
use opc_types::{InputMap, PolicySource, QueryName};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::path::PathBuf;

/// One recorded call to [`FakeEvaluator::evaluate`].
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationCall {
    pub origin: String,
    pub source_text: String,
    pub query: String,
    pub input: Value,
}

/// A [`PolicyEvaluator`] that answers every call with a scripted value or error
/// and remembers what it was asked.
#[derive(Debug)]
pub struct FakeEvaluator {
    response: Result<Value, String>,
    calls: RefCell<Vec<EvaluationCall>>,
}

impl FakeEvaluator {
    pub fn returning(value: Value) -> Self {
        Self {
            response: Ok(value),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<EvaluationCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl PolicyEvaluator for FakeEvaluator {
    fn evaluate(
        &self,
        source: &PolicySource,
        query: &QueryName,
        input: &InputMap,
    ) -> anyhow::Result<Value> {
        self.calls.borrow_mut().push(EvaluationCall {
            origin: source.origin().to_string(),
            source_text: source.text().to_string(),
            query: query.to_string(),
            input: input.to_json(),
        });
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}

/// Read env-file output back into a JSON object.
///
/// Single-quoted values are decoded as JSON, empty values as `null`, and bare values as a
/// JSON number or boolean when they parse as one, otherwise as a string.
pub fn parse_env_file(text: &str) -> Map<String, Value> {
    let mut map = Map::new();
    for line in text.lines().filter(|l| !l.is_empty()) {
        let (key, raw) = line
            .split_once('=')
            .unwrap_or_else(|| panic!("env-file line without '=': {line:?}"));
        map.insert(key.to_string(), decode_env_value(raw));
    }
    map
}

fn decode_env_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Some(inner) = raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')) {
        return serde_json::from_str(inner)
            .unwrap_or_else(|e| panic!("quoted env-file value is not JSON ({e}): {raw}"));
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Number(_) | Value::Bool(_))) => v,
        _ => Value::String(raw.to_string()),
    }
}

/// Parse JSON output, panicking with the offending text on failure.
pub fn parse_json_output(text: &str) -> Value {
    serde_json::from_str(text.trim())
        .unwrap_or_else(|e| panic!("output is not JSON ({e}):\n{text}"))
}

/// Repo-level `tests/fixtures` directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("opc-test-util should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
