use tracing::{error, info};

use super::summary_data;
use crate::cloudformation::CfnResponse;
use crate::core::config::AppConfig;
use crate::core::models::CustomResourceEvent;
use crate::functions::FunctionApi;

/// Applies the new configuration. Function code is left untouched.
pub async fn update_function_configuration<A>(
    api: &A,
    event: &CustomResourceEvent,
    config: &AppConfig,
) -> CfnResponse
where
    A: FunctionApi + ?Sized,
{
    let log_stream = config.log_stream_name.as_str();

    let definition = match event.function_definition() {
        Ok(Some(definition)) => definition,
        Ok(None) => {
            error!("Update request is missing ResourceProperties.Lambda");
            return CfnResponse::failed(event, log_stream, "ResourceProperties.Lambda is required");
        }
        Err(e) => {
            error!("Update request has an invalid definition: {}", e);
            let response = CfnResponse::failed(event, log_stream, e.to_string());
            return match event.function_name().filter(|name| !name.is_empty()) {
                Some(name) => response.with_physical_resource_id(name),
                None => response,
            };
        }
    };
    let function_name = definition.function_name.as_str();
    if function_name.trim().is_empty() {
        return CfnResponse::failed(event, log_stream, "Lambda.FunctionName is required");
    }

    info!(
        function_name = %function_name,
        definition = %serde_json::to_string(&definition).unwrap_or_default(),
        "Updating lambda"
    );

    match api.update_function_configuration(&definition).await {
        Ok(summary) => CfnResponse::success(event, log_stream)
            .with_physical_resource_id(function_name)
            .with_data(summary_data(&summary)),
        Err(e) => {
            error!(function_name = %function_name, "Lambda update failed: {}", e);
            CfnResponse::failed(event, log_stream, e.to_string())
                .with_physical_resource_id(function_name)
        }
    }
}
