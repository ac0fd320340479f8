//! Client error type

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    NoWindow,
    MissingElement(String),
    WrongElementType(String),
    Js(String),
    Surface(String),
    NoAdapter,
    Device(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NoWindow => write!(f, "no browser window or document"),
            ClientError::MissingElement(id) => write!(f, "element #{} not found", id),
            ClientError::WrongElementType(id) => write!(f, "element #{} has the wrong type", id),
            ClientError::Js(msg) => write!(f, "javascript error: {}", msg),
            ClientError::Surface(msg) => write!(f, "surface error: {}", msg),
            ClientError::NoAdapter => write!(f, "failed to find a WebGPU adapter"),
            ClientError::Device(msg) => write!(f, "failed to create device: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
