use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::models::FunctionDefinition;
use crate::errors::ProvisionError;

/// Where the code for a new function comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeSource {
    S3 {
        bucket: String,
        key: Option<String>,
        object_version: Option<String>,
    },
    ZipFile(Vec<u8>),
}

/// The part of a create/update result handed back to CloudFormation as `Data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_sha256: Option<String>,
}

/// Function management calls the provisioner depends on.
#[async_trait]
pub trait FunctionApi: Send + Sync {
    async fn create_function(
        &self,
        definition: &FunctionDefinition,
        code: &CodeSource,
    ) -> Result<FunctionSummary, ProvisionError>;

    async fn update_function_configuration(
        &self,
        definition: &FunctionDefinition,
    ) -> Result<FunctionSummary, ProvisionError>;

    async fn delete_function(&self, function_name: &str) -> Result<(), ProvisionError>;
}
