//! Lambda handler for the custom-resource provider.

use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use super::{create, delete, update};
use crate::cloudformation::{CfnResponse, ResponseSender};
use crate::core::config::AppConfig;
use crate::core::models::{CustomResourceEvent, RequestType};
use crate::errors::ProvisionError;
use crate::functions::FunctionApi;

pub use self::function_handler as handler;

/// Ties the function API, the response channel and configuration together.
pub struct Provisioner<A, S> {
    api: A,
    sender: S,
    config: AppConfig,
}

impl<A, S> Provisioner<A, S>
where
    A: FunctionApi,
    S: ResponseSender,
{
    pub fn new(api: A, sender: S, config: AppConfig) -> Self {
        Self {
            api,
            sender,
            config,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Runs the requested operation and builds the response, without sending it.
    pub async fn respond(&self, event: &CustomResourceEvent) -> CfnResponse {
        match &event.request_type {
            RequestType::Create => create::create_function(&self.api, event, &self.config).await,
            RequestType::Update => {
                update::update_function_configuration(&self.api, event, &self.config).await
            }
            RequestType::Delete => delete::delete_function(&self.api, event, &self.config).await,
            RequestType::Other(other) => {
                warn!(request_type = %other, "Unknown request type");
                CfnResponse::failed(
                    event,
                    &self.config.log_stream_name,
                    format!("Unknown event: {other}"),
                )
            }
        }
    }

    /// Parses a raw payload, runs it and delivers the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a custom-resource event or the
    /// response cannot be delivered. Operation failures are reported to
    /// CloudFormation as `FAILED` and are not errors here.
    pub async fn handle(&self, payload: Value) -> Result<CfnResponse, ProvisionError> {
        let event = match CustomResourceEvent::deserialize(&payload) {
            Ok(event) => event,
            Err(e) => {
                let err = ProvisionError::from(e);
                error!("Failed to parse custom resource event: {}", err);
                return Err(self.reject_raw(&payload, err).await);
            }
        };

        info!(
            request_type = %event.request_type,
            logical_resource_id = %event.logical_resource_id,
            stack_id = %event.stack_id,
            physical_resource_id = event.physical_resource_id.as_deref().unwrap_or_default(),
            "Received custom resource request"
        );

        let response = self.respond(&event).await;
        info!(
            status = ?response.status,
            physical_resource_id = %response.physical_resource_id,
            reason = %response.reason,
            "Custom resource request processed"
        );

        self.sender.send(&event.response_url, &response).await?;
        Ok(response)
    }

    // Without a ResponseURL there is nobody to tell; otherwise fail the
    // resource so the stack does not wait for the timeout.
    async fn reject_raw(&self, payload: &Value, err: ProvisionError) -> ProvisionError {
        let Some(response_url) = payload.get("ResponseURL").and_then(Value::as_str) else {
            return err;
        };

        let response =
            CfnResponse::failed_from_raw(payload, &self.config.log_stream_name, err.to_string());
        if let Err(send_err) = self.sender.send(response_url, &response).await {
            error!("Failed to report invalid event: {}", send_err);
        }
        err
    }
}

/// Lambda handler for the provider entrypoint.
///
/// # Errors
///
/// Returns an error when the event is malformed or the response could not be
/// delivered to CloudFormation.
pub async fn function_handler<A, S>(
    event: LambdaEvent<Value>,
    provisioner: &Provisioner<A, S>,
) -> Result<CfnResponse, Error>
where
    A: FunctionApi,
    S: ResponseSender,
{
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Custom resource provider invoked");

    provisioner.handle(payload).await.map_err(|e| {
        error!("Custom resource request failed: {}", e);
        Error::from(e)
    })
}
