//! lambda-resource - A CloudFormation custom resource that manages an AWS Lambda function.
//!
//! The provider Lambda receives custom-resource requests whose
//! `ResourceProperties.Lambda` block has the same shape as an
//! `AWS::Lambda::Function`, and:
//! 1. On `Create`, creates the function. Without a code reference it deploys a
//!    placeholder Node.js "echo" function packaged on the fly
//! 2. On `Update`, updates the function configuration
//! 3. On `Delete`, deletes the function if this resource created it
//!
//! Every outcome is reported to CloudFormation through the request's
//! pre-signed `ResponseURL`, with the function name as physical resource id.
//!
//! # Architecture
//!
//! The system uses:
//! - `lambda_runtime` for the provider's execution loop
//! - `aws-sdk-lambda` for function management
//! - `reqwest` for signalling CloudFormation
//! - `zip` for packaging the placeholder function
//!
//! # Example
//!
//! ```no_run
//! use lambda_resource::cloudformation::HttpResponseSender;
//! use lambda_resource::core::config::AppConfig;
//! use lambda_resource::functions::AwsLambdaApi;
//! use lambda_resource::provisioner::Provisioner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     lambda_resource::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let sender = HttpResponseSender::new(config.response_timeout)?;
//!     let provisioner = Provisioner::new(AwsLambdaApi::from_env().await, sender, config);
//!
//!     let event = serde_json::json!({
//!         "RequestType": "Create",
//!         "ResponseURL": "https://cloudformation-custom-resource-response.s3.amazonaws.com/...",
//!         "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/demo/guid",
//!         "RequestId": "unique-id",
//!         "LogicalResourceId": "EchoFunction",
//!         "ResourceProperties": {
//!             "Lambda": {
//!                 "FunctionName": "demo-echo",
//!                 "Role": "arn:aws:iam::123456789012:role/lambda-basic"
//!             }
//!         }
//!     });
//!
//!     let response = provisioner.handle(event).await?;
//!     println!("{:?}: {}", response.status, response.physical_resource_id);
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod cloudformation;
pub mod core;
pub mod errors;
pub mod functions;
pub mod provisioner;

pub use errors::ProvisionError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// lambda_resource::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
