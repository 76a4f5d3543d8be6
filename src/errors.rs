use aws_sdk_lambda::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Invalid custom resource event: {0}")]
    InvalidEvent(String),

    #[error("Invalid function definition: {0}")]
    InvalidDefinition(String),

    #[error("Failed to build placeholder package: {0}")]
    PackageError(String),

    #[error("Failed to interact with AWS Lambda: {0}")]
    AwsError(String),

    #[error("Failed to send CloudFormation response: {0}")]
    ResponseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for ProvisionError {
    fn from(error: serde_json::Error) -> Self {
        ProvisionError::InvalidEvent(error.to_string())
    }
}

impl From<reqwest::Error> for ProvisionError {
    fn from(error: reqwest::Error) -> Self {
        ProvisionError::ResponseError(error.to_string())
    }
}

impl From<zip::result::ZipError> for ProvisionError {
    fn from(error: zip::result::ZipError) -> Self {
        ProvisionError::PackageError(error.to_string())
    }
}

impl From<std::io::Error> for ProvisionError {
    fn from(error: std::io::Error) -> Self {
        ProvisionError::PackageError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors. `DisplayErrorContext` keeps the
// service error code and message, which plain `Display` drops.
impl<E, R> From<SdkError<E, R>> for ProvisionError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        ProvisionError::AwsError(DisplayErrorContext(&error).to_string())
    }
}
