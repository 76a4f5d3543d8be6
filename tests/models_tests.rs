use lambda_resource::core::models::{CustomResourceEvent, RequestType};
use lambda_resource::errors::ProvisionError;
use serde_json::json;

fn cloudformation_event() -> serde_json::Value {
    // Shape of a real request: every scalar property arrives as a string.
    json!({
        "RequestType": "Update",
        "ServiceToken": "arn:aws:lambda:eu-west-1:123456789012:function:lambda-resource",
        "ResponseURL": "https://cloudformation-custom-resource-response-euwest1.s3.amazonaws.com/x",
        "StackId": "arn:aws:cloudformation:eu-west-1:123456789012:stack/demo/guid",
        "RequestId": "req-42",
        "LogicalResourceId": "Worker",
        "PhysicalResourceId": "worker",
        "ResourceType": "Custom::LambdaFunction",
        "ResourceProperties": {
            "ServiceToken": "arn:aws:lambda:eu-west-1:123456789012:function:lambda-resource",
            "Lambda": {
                "FunctionName": "worker",
                "Role": "arn:aws:iam::123456789012:role/worker",
                "Handler": "index.handler",
                "Timeout": "60",
                "MemorySize": "1024",
                "Publish": "true",
                "KMSKeyArn": "arn:aws:kms:eu-west-1:123456789012:key/abc",
                "VpcConfig": {"SubnetIds": ["subnet-1"], "SecurityGroupIds": ["sg-1"]},
                "TracingConfig": {"Mode": "Active"},
                "DeadLetterConfig": {"TargetArn": "arn:aws:sqs:eu-west-1:123456789012:dlq"},
                "Layers": ["arn:aws:lambda:eu-west-1:123456789012:layer:shared:3"],
                "Tags": [{"Key": "ignored", "Value": "yes"}]
            }
        },
        "OldResourceProperties": {
            "Lambda": {"FunctionName": "worker", "Timeout": "30"}
        }
    })
}

#[test]
fn test_parses_cloudformation_request() {
    let event: CustomResourceEvent = serde_json::from_value(cloudformation_event()).unwrap();

    assert_eq!(event.request_type, RequestType::Update);
    assert_eq!(event.physical_resource_id.as_deref(), Some("worker"));
    assert!(event.old_resource_properties.is_some());

    let lambda = event.function_definition().unwrap().unwrap();
    assert_eq!(lambda.function_name, "worker");
    assert_eq!(lambda.timeout, Some(60));
    assert_eq!(lambda.memory_size, Some(1024));
    assert_eq!(lambda.publish, Some(true));
    assert_eq!(
        lambda.kms_key_arn.as_deref(),
        Some("arn:aws:kms:eu-west-1:123456789012:key/abc")
    );
    assert_eq!(lambda.vpc_config.as_ref().unwrap().subnet_ids, vec!["subnet-1"]);
    assert_eq!(
        lambda.tracing_config.as_ref().unwrap().mode.as_deref(),
        Some("Active")
    );
    assert_eq!(lambda.layers.as_ref().map(Vec::len), Some(1));
    assert!(lambda.s3_bucket().is_none());
}

#[test]
fn test_unknown_request_type_is_preserved() {
    let mut raw = cloudformation_event();
    raw["RequestType"] = json!("Import");

    let event: CustomResourceEvent = serde_json::from_value(raw).unwrap();

    assert_eq!(event.request_type, RequestType::Other("Import".to_string()));
    assert_eq!(event.request_type.to_string(), "Import");
}

#[test]
fn test_request_type_serializes_as_plain_string() {
    assert_eq!(serde_json::to_value(RequestType::Delete).unwrap(), json!("Delete"));
}

#[test]
fn test_definition_serializes_without_empty_fields() {
    let event: CustomResourceEvent = serde_json::from_value(cloudformation_event()).unwrap();
    let lambda = serde_json::to_value(event.function_definition().unwrap().unwrap()).unwrap();

    assert_eq!(lambda["Timeout"], json!(60));
    assert_eq!(lambda["KmsKeyArn"], json!("arn:aws:kms:eu-west-1:123456789012:key/abc"));
    assert!(lambda.get("Description").is_none());
    assert!(lambda.get("Code").is_none());
}

#[test]
fn test_malformed_definition_still_parses_event() {
    let mut raw = cloudformation_event();
    raw["ResourceProperties"]["Lambda"]["Timeout"] = json!("thirty");

    let event: CustomResourceEvent = serde_json::from_value(raw).unwrap();

    assert_eq!(event.function_name(), Some("worker"));
    let err = event.function_definition().unwrap_err();
    assert!(matches!(err, ProvisionError::InvalidDefinition(ref msg) if msg.contains("thirty")));
}

#[test]
fn test_missing_definition_is_none() {
    let mut raw = cloudformation_event();
    raw["ResourceProperties"]
        .as_object_mut()
        .unwrap()
        .remove("Lambda");

    let event: CustomResourceEvent = serde_json::from_value(raw).unwrap();

    assert!(event.function_definition().unwrap().is_none());
    assert!(event.function_name().is_none());
}
