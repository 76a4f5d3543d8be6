use std::io::{Cursor, Read};

use lambda_resource::core::placeholder::{HandlerSpec, echo_function_zip, echo_source};
use lambda_resource::errors::ProvisionError;

#[test]
fn test_handler_spec_splits_at_first_dot() {
    let spec = HandlerSpec::parse("index.handler").unwrap();
    assert_eq!(spec.module, "index");
    assert_eq!(spec.export, "handler");
    assert_eq!(spec.file_name(), "index.js");

    let nested = HandlerSpec::parse("src/app.main.v2").unwrap();
    assert_eq!(nested.module, "src/app");
    assert_eq!(nested.export, "main.v2");
}

#[test]
fn test_handler_spec_rejects_malformed_handlers() {
    for handler in ["handler", ".handler", "index.", ""] {
        let err = HandlerSpec::parse(handler).unwrap_err();
        assert!(
            matches!(err, ProvisionError::InvalidDefinition(_)),
            "{handler:?} should be rejected"
        );
    }
}

#[test]
fn test_echo_source_exports_requested_function() {
    let source = echo_source("handler");
    assert!(source.starts_with("'use strict';\n"));
    assert!(source.contains("exports.handler = async function(event) {"));
    assert!(source.contains("    console.log('Event:', JSON.stringify(event));\n"));
    assert!(source.contains("    return event;\n"));
}

#[test]
fn test_echo_function_zip_contains_only_the_module() {
    let bytes = echo_function_zip("index.handler").unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert_eq!(archive.len(), 1);
    let mut file = archive.by_name("index.js").unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, echo_source("handler"));
}

#[test]
fn test_echo_function_zip_rejects_bad_handler() {
    assert!(echo_function_zip("nodot").is_err());
}
