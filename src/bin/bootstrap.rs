// This is the Lambda bootstrap entry point for the custom resource provider

use lambda_resource::cloudformation::HttpResponseSender;
use lambda_resource::core::config::AppConfig;
use lambda_resource::functions::AwsLambdaApi;
use lambda_resource::provisioner::{Provisioner, handler};
use lambda_runtime::{Error, run, service_fn};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_resource::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Clients are built once per container and shared across invocations.
    let sender = HttpResponseSender::new(config.response_timeout)?;
    let api = AwsLambdaApi::from_env().await;
    let provisioner = Provisioner::new(api, sender, config);
    let provisioner = &provisioner;

    run(service_fn(move |event| async move {
        handler(event, provisioner).await
    }))
    .await
}
