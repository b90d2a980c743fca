//! Use case orchestration for opc.
//!
//! This crate provides the application layer: it reads the policy module, hands it to a
//! [`PolicyEvaluator`](opc_engine::PolicyEvaluator), and renders the result into a sink. The
//! evaluator is injected, so everything here runs against a fake in tests.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging, and exit codes.

#![forbid(unsafe_code)]

mod module;
mod run;

pub use module::read_module;
pub use run::{evaluate_config, execute, run};
