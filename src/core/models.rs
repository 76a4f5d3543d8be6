use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::de;
use crate::errors::ProvisionError;

/// The lifecycle action CloudFormation is asking for.
///
/// Unrecognised values are preserved so they can be reported back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestType {
    Create,
    Update,
    Delete,
    Other(String),
}

impl From<String> for RequestType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Create" => RequestType::Create,
            "Update" => RequestType::Update,
            "Delete" => RequestType::Delete,
            _ => RequestType::Other(value),
        }
    }
}

impl From<RequestType> for String {
    fn from(value: RequestType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestType::Create => f.write_str("Create"),
            RequestType::Update => f.write_str("Update"),
            RequestType::Delete => f.write_str("Delete"),
            RequestType::Other(other) => f.write_str(other),
        }
    }
}

/// A CloudFormation custom-resource request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceEvent {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    #[serde(default)]
    pub resource_type: String,
    pub logical_resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    #[serde(default)]
    pub resource_properties: ResourceProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_resource_properties: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_token: Option<String>,
}

impl CustomResourceEvent {
    /// The function definition carried under `ResourceProperties.Lambda`.
    ///
    /// # Errors
    ///
    /// Returns an error if the block does not match the function schema.
    pub fn function_definition(&self) -> Result<Option<FunctionDefinition>, ProvisionError> {
        match &self.resource_properties.lambda {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(lambda) => FunctionDefinition::deserialize(lambda)
                .map(Some)
                .map_err(|e| ProvisionError::InvalidDefinition(e.to_string())),
        }
    }

    /// `ResourceProperties.Lambda.FunctionName`, read without validating the
    /// rest of the definition.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        self.resource_properties
            .lambda
            .as_ref()
            .and_then(|lambda| lambda.get("FunctionName"))
            .and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_token: Option<String>,
    // Kept raw so a malformed definition cannot block a delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<serde_json::Value>,
}

/// Function settings in the shape of `AWS::Lambda::Function` properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionDefinition {
    #[serde(default)]
    pub function_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "de::opt_i32",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<i32>,
    #[serde(
        default,
        deserialize_with = "de::opt_i32",
        skip_serializing_if = "Option::is_none"
    )]
    pub memory_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcSettings>,
    #[serde(default, alias = "KMSKeyArn", skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing_config: Option<TracingSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_letter_config: Option<DeadLetterSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "de::opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish: Option<bool>,
}

impl FunctionDefinition {
    /// The S3 bucket holding the function code, if one was referenced.
    #[must_use]
    pub fn s3_bucket(&self) -> Option<&str> {
        self.code
            .as_ref()
            .and_then(|code| code.s3_bucket.as_deref())
            .filter(|bucket| !bucket.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_object_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentSettings {
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcSettings {
    #[serde(default)]
    pub subnet_ids: Vec<String>,
    #[serde(default)]
    pub security_group_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TracingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeadLetterSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
}
