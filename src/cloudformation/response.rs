//! The response envelope CloudFormation expects at the pre-signed `ResponseURL`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::models::CustomResourceEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CfnResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub no_echo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Longest `Reason` sent back. CloudFormation rejects bodies over 4096 bytes.
pub const MAX_REASON_BYTES: usize = 1024;

/// Reason text attached to successful responses.
#[must_use]
pub fn log_stream_reason(log_stream_name: &str) -> String {
    format!("See the details in CloudWatch Log Stream: {log_stream_name}")
}

/// Cuts `reason` to at most [`MAX_REASON_BYTES`], on a character boundary.
#[must_use]
pub fn truncate_reason(mut reason: String) -> String {
    if reason.len() <= MAX_REASON_BYTES {
        return reason;
    }
    let mut end = MAX_REASON_BYTES;
    while !reason.is_char_boundary(end) {
        end -= 1;
    }
    reason.truncate(end);
    reason
}

impl CfnResponse {
    /// A `SUCCESS` response that keeps the resource's current identity.
    ///
    /// The identity is the event's `PhysicalResourceId` when present, otherwise
    /// the log stream name.
    #[must_use]
    pub fn success(event: &CustomResourceEvent, log_stream_name: &str) -> Self {
        Self::for_event(
            event,
            ResponseStatus::Success,
            log_stream_reason(log_stream_name),
            log_stream_name,
        )
    }

    /// A `FAILED` response carrying `reason` verbatim, up to [`MAX_REASON_BYTES`].
    #[must_use]
    pub fn failed(
        event: &CustomResourceEvent,
        log_stream_name: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::for_event(
            event,
            ResponseStatus::Failed,
            truncate_reason(reason.into()),
            log_stream_name,
        )
    }

    /// A `FAILED` response for a payload that could not be parsed as an event.
    ///
    /// Identifiers are copied from the raw payload where they exist.
    #[must_use]
    pub fn failed_from_raw(
        payload: &Value,
        log_stream_name: &str,
        reason: impl Into<String>,
    ) -> Self {
        let field = |name: &str| {
            payload
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let physical_resource_id = payload
            .get("PhysicalResourceId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .unwrap_or(log_stream_name)
            .to_string();

        Self {
            status: ResponseStatus::Failed,
            reason: truncate_reason(reason.into()),
            physical_resource_id,
            stack_id: field("StackId"),
            request_id: field("RequestId"),
            logical_resource_id: field("LogicalResourceId"),
            no_echo: false,
            data: None,
        }
    }

    fn for_event(
        event: &CustomResourceEvent,
        status: ResponseStatus,
        reason: String,
        log_stream_name: &str,
    ) -> Self {
        let physical_resource_id = event
            .physical_resource_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(log_stream_name)
            .to_string();

        Self {
            status,
            reason,
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            no_echo: false,
            data: None,
        }
    }

    #[must_use]
    pub fn with_physical_resource_id(mut self, id: impl Into<String>) -> Self {
        self.physical_resource_id = id.into();
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
