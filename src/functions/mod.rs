//! Lambda function management

pub mod api;
pub mod client;

pub use api::{CodeSource, FunctionApi, FunctionSummary};
pub use client::AwsLambdaApi;
