use serde::Deserialize;
use serde::Serialize;

use super::value::EncodableValue;
use crate::host::error::HostError;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: EncodableValue,
}

impl MethodCall {
    pub fn new(method: &str, arguments: EncodableValue) -> MethodCall {
        MethodCall {
            method: method.to_owned(),
            arguments,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MethodResponse {
    Success(EncodableValue),
    Error { code: String, message: String },
    NotImplemented,
}

impl MethodResponse {
    pub fn error(code: &str, message: &str) -> MethodResponse {
        MethodResponse::Error {
            code: code.to_owned(),
            message: message.to_owned(),
        }
    }
}

impl From<Result<bool, HostError>> for MethodResponse {
    fn from(result: Result<bool, HostError>) -> Self {
        match result {
            Ok(value) => MethodResponse::Success(value.into()),
            Err(HostError::NotImplemented(_)) => MethodResponse::NotImplemented,
            Err(e) => MethodResponse::error(e.get_code(), &e.get_info()),
        }
    }
}

/// Handler invoked for every call received on a channel
pub type MethodCallHandler = Box<dyn FnMut(&MethodCall) -> MethodResponse>;
