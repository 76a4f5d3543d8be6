//! Custom-resource request dispatch and the three lifecycle operations

pub mod create;
pub mod delete;
pub mod handler;
pub mod update;

use serde_json::Value;

use crate::functions::FunctionSummary;

// Re-export the main handler for convenience
pub use handler::{Provisioner, handler};

pub(crate) fn summary_data(summary: &FunctionSummary) -> Value {
    serde_json::to_value(summary).unwrap_or(Value::Null)
}
