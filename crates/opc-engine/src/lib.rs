//! Policy evaluation seam.
//!
//! The rest of the workspace only sees [`PolicyEvaluator`]; the Rego engine is one
//! implementation of it and tests substitute their own.

#![forbid(unsafe_code)]

mod rego;

pub use rego::RegoEvaluator;

use opc_types::{InputMap, PolicySource, QueryName};

/// Evaluate a policy module against an input map.
///
/// Implementations return the first expression value of the first result, untouched.
/// Shape checks are left to the caller.
pub trait PolicyEvaluator {
    fn evaluate(
        &self,
        source: &PolicySource,
        query: &QueryName,
        input: &InputMap,
    ) -> anyhow::Result<serde_json::Value>;
}
