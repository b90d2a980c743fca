use anyhow::Context;
use opc_types::{InputMap, PolicySource, QueryName};
use regorus::{Engine, Value};

use crate::PolicyEvaluator;

/// [`PolicyEvaluator`] backed by the `regorus` Rego interpreter.
///
/// A fresh engine is built for every call, so no state leaks between evaluations.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegoEvaluator;

impl RegoEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl PolicyEvaluator for RegoEvaluator {
    fn evaluate(
        &self,
        source: &PolicySource,
        query: &QueryName,
        input: &InputMap,
    ) -> anyhow::Result<serde_json::Value> {
        let mut engine = Engine::new();
        engine
            .add_policy(source.origin().to_string(), source.text().to_string())
            .with_context(|| format!("compile module {}", source.origin()))?;

        let input_json = serde_json::to_string(&input.to_json()).context("encode input")?;
        engine.set_input(Value::from_json_str(&input_json).context("load input")?);

        tracing::debug!(
            %query,
            package = query.package(),
            module = %source.origin(),
            inputs = ?input.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            "evaluating query"
        );
        let results = engine
            .eval_query(query.to_string(), false)
            .with_context(|| format!("evaluate query {query}"))?;

        let first = results
            .result
            .into_iter()
            .next()
            .with_context(|| format!("query {query} produced no result"))?;
        let expression = first
            .expressions
            .into_iter()
            .next()
            .with_context(|| format!("query {query} produced no expressions"))?;

        let json = expression
            .value
            .to_json_str()
            .context("encode query result")?;
        serde_json::from_str(&json).context("decode query result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SIMPLE: &str = r#"package main

import rego.v1

env := input.env if input.env == "QA"
"#;

    fn eval(
        text: &str,
        package: &str,
        input: &[(&str, &str)],
    ) -> anyhow::Result<serde_json::Value> {
        let source = PolicySource::new("simple.rego", text);
        let input: InputMap = input.iter().copied().collect();
        RegoEvaluator::new().evaluate(&source, &QueryName::for_package(package), &input)
    }

    #[test]
    fn evaluates_package_object_with_input() {
        let value = eval(SIMPLE, "main", &[("env", "QA")]).expect("evaluate");
        assert_eq!(value, json!({"env": "QA"}));
    }

    #[test]
    fn undefined_rules_yield_empty_object() {
        let value = eval(SIMPLE, "main", &[]).expect("evaluate");
        assert_eq!(value, json!({}));

        let value = eval(SIMPLE, "main", &[("env", "PROD")]).expect("evaluate");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn queries_nested_package() {
        let text = r#"package service.api

import rego.v1

port := 8080

hosts := ["a", "b"]
"#;
        let value = eval(text, "service.api", &[]).expect("evaluate");
        assert_eq!(value, json!({"port": 8080, "hosts": ["a", "b"]}));
    }

    #[test]
    fn syntax_error_surfaces_as_error() {
        let err = eval("package main\n\nthis is not rego {", "main", &[]).unwrap_err();
        assert!(
            format!("{err:#}").contains("compile module simple.rego"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn unknown_package_has_no_result() {
        let err = eval(SIMPLE, "missing", &[]).unwrap_err();
        assert!(
            format!("{err:#}").contains("data.missing"),
            "unexpected error: {err:#}"
        );
    }
}
