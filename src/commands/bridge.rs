//! Webview Bridge Transport
//!
//! Calls `window.pywebview.api.<operation>(...args)` with positional
//! arguments when the page runs inside the desktop shell.

use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::operation::Call;
use crate::error::ApiError;

/// Host API object, if the page is embedded in the webview
fn host_api() -> Option<JsValue> {
    let window = web_sys::window()?;
    let bridge = Reflect::get(&window, &JsValue::from_str("pywebview")).ok()?;
    if bridge.is_undefined() || bridge.is_null() {
        return None;
    }
    let api = Reflect::get(&bridge, &JsValue::from_str("api")).ok()?;
    if api.is_undefined() || api.is_null() {
        return None;
    }
    Some(api)
}

/// Checked on every call: the host injects its object after page load
pub fn is_available() -> bool {
    host_api().is_some()
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

pub async fn invoke(call: &Call) -> Result<Value, ApiError> {
    let operation = call.operation.as_str();
    let bridge_err = |message: String| ApiError::Bridge { operation, message };

    let api = host_api().ok_or_else(|| bridge_err("webview bridge not available".to_string()))?;
    let function: Function = Reflect::get(&api, &JsValue::from_str(operation))
        .map_err(|e| bridge_err(js_message(&e)))?
        .dyn_into()
        .map_err(|_| bridge_err("host does not expose this operation".to_string()))?;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let args = Array::new();
    for arg in &call.args {
        let js_arg = arg
            .serialize(&serializer)
            .map_err(|e| bridge_err(e.to_string()))?;
        args.push(&js_arg);
    }

    let returned = function
        .apply(&api, &args)
        .map_err(|e| bridge_err(js_message(&e)))?;
    let resolved = match returned.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .map_err(|e| bridge_err(js_message(&e)))?,
        Err(value) => value,
    };

    if resolved.is_undefined() || resolved.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(resolved).map_err(|e| bridge_err(e.to_string()))
}
