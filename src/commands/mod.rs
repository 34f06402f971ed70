//! Backend Command Wrappers
//!
//! Frontend bindings to backend operations, organized by domain. Every call
//! goes through `invoke`, which picks the webview bridge when the host
//! exposes one and falls back to the HTTP API otherwise.

mod bridge;
mod http;
mod operation;
mod item;
mod inventory;
mod maintenance;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

use crate::error::ApiError;

pub use operation::{Call, OperationName};

// Re-export all public items
pub use item::*;
pub use inventory::*;
pub use maintenance::*;

/// Which way calls currently reach the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Bridge,
    Http,
}

impl Transport {
    pub fn current() -> Self {
        if bridge::is_available() {
            Transport::Bridge
        } else {
            Transport::Http
        }
    }
}

async fn invoke(call: Call) -> Result<Value, ApiError> {
    let transport = Transport::current();
    log::debug!("[API] {} via {:?}", call.operation.as_str(), transport);
    match transport {
        Transport::Bridge => bridge::invoke(&call).await,
        Transport::Http => http::invoke(&call).await,
    }
}

async fn invoke_as<T: DeserializeOwned>(call: Call) -> Result<T, ApiError> {
    let value = invoke(call).await?;
    Ok(serde_json::from_value(value)?)
}

/// Call an operation by name (snake_case or camelCase) with named arguments
pub async fn call_named(name: &str, args: Map<String, Value>) -> Result<Value, ApiError> {
    invoke(Call::from_named(name, args)?).await
}

/// `apiCall(name, args)` for page scripts and the browser console
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call(name: String, args: JsValue) -> Result<JsValue, JsValue> {
    let args: Map<String, Value> = if args.is_undefined() || args.is_null() {
        Map::new()
    } else {
        serde_wasm_bindgen::from_value(args).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let result = call_named(&name, args)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
