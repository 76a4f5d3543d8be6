use std::error::Error;
use lambda_resource::errors::ProvisionError;

#[test]
fn test_provision_error_implements_error_trait() {
    // Verify ProvisionError implements the Error trait
    fn assert_error<T: Error + Send + Sync>(_: &T) {}

    let error = ProvisionError::InvalidEvent("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_provision_error_display() {
    let error = ProvisionError::AwsError("ResourceConflictException".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS Lambda: ResourceConflictException"
    );

    let error = ProvisionError::InvalidDefinition("handler missing".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid function definition: handler missing"
    );

    let error = ProvisionError::ResponseError("403".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send CloudFormation response: 403"
    );
}

#[test]
fn test_provision_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    match ProvisionError::from(err) {
        ProvisionError::InvalidEvent(msg) => assert!(!msg.is_empty()),
        other => panic!("Unexpected error type: {other:?}"),
    }

    let err = std::io::Error::other("disk full");
    match ProvisionError::from(err) {
        ProvisionError::PackageError(msg) => assert_eq!(msg, "disk full"),
        other => panic!("Unexpected error type: {other:?}"),
    }

    // Compile-time check that SDK errors convert.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_sdk_conversion(
        err: aws_sdk_lambda::error::SdkError<
            aws_sdk_lambda::operation::delete_function::DeleteFunctionError,
        >,
    ) -> ProvisionError {
        ProvisionError::from(err)
    }
}
