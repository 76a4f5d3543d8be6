use tracing::{error, info};

use super::summary_data;
use crate::cloudformation::CfnResponse;
use crate::core::config::AppConfig;
use crate::core::models::{CustomResourceEvent, FunctionDefinition};
use crate::core::placeholder::{self, DEFAULT_DESCRIPTION, DEFAULT_HANDLER};
use crate::errors::ProvisionError;
use crate::functions::{CodeSource, FunctionApi};

/// Fills in what a code-less definition needs to deploy the echo function.
///
/// # Errors
///
/// Returns an error if the handler is malformed or the archive cannot be built.
pub fn resolve_code(
    definition: &FunctionDefinition,
    config: &AppConfig,
) -> Result<(FunctionDefinition, CodeSource), ProvisionError> {
    let mut resolved = definition.clone();

    if let Some(bucket) = definition.s3_bucket() {
        let location = definition.code.clone().unwrap_or_default();
        let code = CodeSource::S3 {
            bucket: bucket.to_string(),
            key: location.s3_key,
            object_version: location.s3_object_version,
        };
        return Ok((resolved, code));
    }

    let handler = resolved
        .handler
        .get_or_insert_with(|| DEFAULT_HANDLER.to_string())
        .clone();
    let zip = placeholder::echo_function_zip(&handler)?;

    resolved
        .description
        .get_or_insert_with(|| DEFAULT_DESCRIPTION.to_string());
    resolved.runtime = Some(config.placeholder_runtime.clone());
    resolved.code = None;

    Ok((resolved, CodeSource::ZipFile(zip)))
}

/// Creates the function and reports its name as the resource identity.
///
/// On failure no function-name identity is reported.
pub async fn create_function<A>(
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
            error!("Create request is missing ResourceProperties.Lambda");
            return CfnResponse::failed(event, log_stream, "ResourceProperties.Lambda is required");
        }
        Err(e) => {
            error!("Create request has an invalid definition: {}", e);
            return CfnResponse::failed(event, log_stream, e.to_string());
        }
    };
    if definition.function_name.trim().is_empty() {
        return CfnResponse::failed(event, log_stream, "Lambda.FunctionName is required");
    }

    let (resolved, code) = match resolve_code(&definition, config) {
        Ok(resolved) => resolved,
        Err(e) => {
            error!("Failed to prepare function code: {}", e);
            return CfnResponse::failed(event, log_stream, e.to_string());
        }
    };

    let placeholder = matches!(code, CodeSource::ZipFile(_));
    info!(
        function_name = %resolved.function_name,
        placeholder,
        definition = %serde_json::to_string(&resolved).unwrap_or_default(),
        "Creating lambda"
    );

    match api.create_function(&resolved, &code).await {
        Ok(summary) => CfnResponse::success(event, log_stream)
            .with_physical_resource_id(&resolved.function_name)
            .with_data(summary_data(&summary)),
        Err(e) => {
            error!(function_name = %resolved.function_name, "Lambda creation failed: {}", e);
            CfnResponse::failed(event, log_stream, e.to_string())
        }
    }
}
