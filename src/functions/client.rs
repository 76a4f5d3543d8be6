//! AWS Lambda implementation of [`FunctionApi`].

use async_trait::async_trait;
use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lambda::operation::create_function::CreateFunctionOutput;
use aws_sdk_lambda::operation::update_function_configuration::UpdateFunctionConfigurationOutput;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::{
    DeadLetterConfig, Environment, FunctionCode, Runtime, TracingConfig, TracingMode, VpcConfig,
};
use tracing::info;

use super::api::{CodeSource, FunctionApi, FunctionSummary};
use crate::core::models::FunctionDefinition;
use crate::errors::ProvisionError;

#[derive(Debug, Clone)]
pub struct AwsLambdaApi {
    client: LambdaClient,
}

impl AwsLambdaApi {
    #[must_use]
    pub fn new(client: LambdaClient) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS credential and region chain.
    pub async fn from_env() -> Self {
        let shared_config = aws_config::from_env().load().await;
        Self::new(LambdaClient::new(&shared_config))
    }
}

fn function_code(code: &CodeSource) -> FunctionCode {
    match code {
        CodeSource::S3 {
            bucket,
            key,
            object_version,
        } => FunctionCode::builder()
            .s3_bucket(bucket)
            .set_s3_key(key.clone())
            .set_s3_object_version(object_version.clone())
            .build(),
        CodeSource::ZipFile(bytes) => FunctionCode::builder()
            .zip_file(Blob::new(bytes.clone()))
            .build(),
    }
}

fn environment(definition: &FunctionDefinition) -> Option<Environment> {
    definition.environment.as_ref().map(|env| {
        Environment::builder()
            .set_variables(Some(env.variables.clone()))
            .build()
    })
}

fn vpc_config(definition: &FunctionDefinition) -> Option<VpcConfig> {
    definition.vpc_config.as_ref().map(|vpc| {
        VpcConfig::builder()
            .set_subnet_ids(Some(vpc.subnet_ids.clone()))
            .set_security_group_ids(Some(vpc.security_group_ids.clone()))
            .build()
    })
}

fn tracing_config(definition: &FunctionDefinition) -> Option<TracingConfig> {
    definition.tracing_config.as_ref().map(|tracing| {
        TracingConfig::builder()
            .set_mode(tracing.mode.as_deref().map(TracingMode::from))
            .build()
    })
}

fn dead_letter_config(definition: &FunctionDefinition) -> Option<DeadLetterConfig> {
    definition.dead_letter_config.as_ref().map(|dlq| {
        DeadLetterConfig::builder()
            .set_target_arn(dlq.target_arn.clone())
            .build()
    })
}

impl From<&CreateFunctionOutput> for FunctionSummary {
    fn from(output: &CreateFunctionOutput) -> Self {
        Self {
            function_name: output.function_name().map(str::to_string),
            function_arn: output.function_arn().map(str::to_string),
            runtime: output.runtime().map(|r| r.as_str().to_string()),
            handler: output.handler().map(str::to_string),
            version: output.version().map(str::to_string),
            last_modified: output.last_modified().map(str::to_string),
            code_sha256: output.code_sha256().map(str::to_string),
        }
    }
}

impl From<&UpdateFunctionConfigurationOutput> for FunctionSummary {
    fn from(output: &UpdateFunctionConfigurationOutput) -> Self {
        Self {
            function_name: output.function_name().map(str::to_string),
            function_arn: output.function_arn().map(str::to_string),
            runtime: output.runtime().map(|r| r.as_str().to_string()),
            handler: output.handler().map(str::to_string),
            version: output.version().map(str::to_string),
            last_modified: output.last_modified().map(str::to_string),
            code_sha256: output.code_sha256().map(str::to_string),
        }
    }
}

#[async_trait]
impl FunctionApi for AwsLambdaApi {
    async fn create_function(
        &self,
        definition: &FunctionDefinition,
        code: &CodeSource,
    ) -> Result<FunctionSummary, ProvisionError> {
        let output = self
            .client
            .create_function()
            .function_name(&definition.function_name)
            .set_role(definition.role.clone())
            .set_handler(definition.handler.clone())
            .set_runtime(definition.runtime.as_deref().map(Runtime::from))
            .set_description(definition.description.clone())
            .set_timeout(definition.timeout)
            .set_memory_size(definition.memory_size)
            .code(function_code(code))
            .set_environment(environment(definition))
            .set_vpc_config(vpc_config(definition))
            .set_kms_key_arn(definition.kms_key_arn.clone())
            .set_tracing_config(tracing_config(definition))
            .set_dead_letter_config(dead_letter_config(definition))
            .set_layers(definition.layers.clone())
            .set_publish(definition.publish)
            .send()
            .await?;

        info!(
            function_name = %definition.function_name,
            function_arn = output.function_arn().unwrap_or_default(),
            "Lambda function created"
        );
        Ok(FunctionSummary::from(&output))
    }

    async fn update_function_configuration(
        &self,
        definition: &FunctionDefinition,
    ) -> Result<FunctionSummary, ProvisionError> {
        let output = self
            .client
            .update_function_configuration()
            .function_name(&definition.function_name)
            .set_role(definition.role.clone())
            .set_handler(definition.handler.clone())
            .set_runtime(definition.runtime.as_deref().map(Runtime::from))
            .set_description(definition.description.clone())
            .set_timeout(definition.timeout)
            .set_memory_size(definition.memory_size)
            .set_environment(environment(definition))
            .set_vpc_config(vpc_config(definition))
            .set_kms_key_arn(definition.kms_key_arn.clone())
            .set_tracing_config(tracing_config(definition))
            .set_dead_letter_config(dead_letter_config(definition))
            .set_layers(definition.layers.clone())
            .send()
            .await?;

        info!(
            function_name = %definition.function_name,
            "Lambda function configuration updated"
        );
        Ok(FunctionSummary::from(&output))
    }

    async fn delete_function(&self, function_name: &str) -> Result<(), ProvisionError> {
        self.client
            .delete_function()
            .function_name(function_name)
            .send()
            .await?;

        info!(function_name = %function_name, "Lambda function deleted");
        Ok(())
    }
}
