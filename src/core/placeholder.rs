//! Packaging for the initial "echo" function.
//!
//! When a stack creates a function without pointing at any code, a tiny
//! Node.js module is deployed instead. It logs the incoming event and returns
//! it unchanged, which is enough for the stack to wire up triggers before a
//! real deployment replaces the code.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::ProvisionError;

pub const DEFAULT_HANDLER: &str = "index.handler";
pub const DEFAULT_DESCRIPTION: &str = "Initial \"echo\" lambda";

/// A handler string such as `index.handler`, split at its first `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSpec<'a> {
    pub module: &'a str,
    pub export: &'a str,
}

impl<'a> HandlerSpec<'a> {
    /// # Errors
    ///
    /// Returns an error if the handler has no `.` or either side of it is empty.
    pub fn parse(handler: &'a str) -> Result<Self, ProvisionError> {
        let (module, export) = handler.split_once('.').ok_or_else(|| {
            ProvisionError::InvalidDefinition(format!(
                "handler {handler:?} must look like <file>.<export>"
            ))
        })?;

        if module.is_empty() || export.is_empty() {
            return Err(ProvisionError::InvalidDefinition(format!(
                "handler {handler:?} must look like <file>.<export>"
            )));
        }

        Ok(Self { module, export })
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.js", self.module)
    }
}

#[must_use]
pub fn echo_source(export: &str) -> String {
    format!(
        "'use strict';\n\
         exports.{export} = async function(event) {{\n\
         \x20   console.log('Event:', JSON.stringify(event));\n\
         \x20   return event;\n\
         }};\n"
    )
}

/// Builds the zip archive for the echo function behind `handler`.
///
/// # Errors
///
/// Returns an error if the handler is malformed or the archive cannot be written.
pub fn echo_function_zip(handler: &str) -> Result<Vec<u8>, ProvisionError> {
    let spec = HandlerSpec::parse(handler)?;

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file(spec.file_name(), options)?;
    zip.write_all(echo_source(spec.export).as_bytes())?;
    let cursor = zip.finish()?;

    Ok(cursor.into_inner())
}
