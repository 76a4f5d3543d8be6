use tracing::{error, info};

use crate::cloudformation::CfnResponse;
use crate::core::config::AppConfig;
use crate::core::models::CustomResourceEvent;
use crate::functions::FunctionApi;

/// Deletes the function, but only if this resource created it.
///
/// Ownership is proven by the stored physical id matching the function name
/// reported on create. Anything else succeeds without touching the function.
pub async fn delete_function<A>(
    api: &A,
    event: &CustomResourceEvent,
    config: &AppConfig,
) -> CfnResponse
where
    A: FunctionApi + ?Sized,
{
    let log_stream = config.log_stream_name.as_str();
    let function_name = event.function_name().unwrap_or_default();
    let physical_resource_id = event.physical_resource_id.as_deref();

    if function_name.is_empty() || physical_resource_id != Some(function_name) {
        info!(
            function_name = %function_name,
            physical_resource_id = physical_resource_id.unwrap_or_default(),
            "Do not delete lambda: not created by this resource"
        );
        return CfnResponse::success(event, log_stream);
    }

    info!(function_name = %function_name, "Deleting lambda");

    match api.delete_function(function_name).await {
        Ok(()) => CfnResponse::success(event, log_stream).with_physical_resource_id(function_name),
        Err(e) => {
            error!(function_name = %function_name, "Lambda deletion failed: {}", e);
            CfnResponse::failed(event, log_stream, e.to_string())
                .with_physical_resource_id(function_name)
        }
    }
}
