//! CloudFormation custom-resource response protocol

pub mod response;
pub mod sender;

pub use response::{CfnResponse, ResponseStatus};
pub use sender::{HttpResponseSender, ResponseSender};
