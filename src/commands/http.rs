//! HTTP Transport
//!
//! `POST <api_base>/<operation>` with a JSON body, for the plain browser mode.

use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::operation::Call;
use crate::config;
use crate::error::ApiError;

pub fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), path)
}

async fn read_json(operation: &str, response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            operation: operation.to_string(),
            status: response.status(),
        });
    }
    Ok(response.json::<Value>().await?)
}

pub async fn invoke(call: &Call) -> Result<Value, ApiError> {
    let operation = call.operation.as_str();
    let url = endpoint(&config::api_base(), operation);
    let response = Request::post(&url).json(&call.body())?.send().await?;
    read_json(operation, response).await
}

/// `GET` with query parameters, used by the inventory listing
pub async fn get(path: &str, params: &[(&'static str, String)]) -> Result<Value, ApiError> {
    let url = endpoint(&config::api_base(), path);
    let response = Request::get(&url)
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await?;
    read_json(path, response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(endpoint("/api", "get_item"), "/api/get_item");
        assert_eq!(endpoint("http://localhost:8080/api/", "get_stats"), "http://localhost:8080/api/get_stats");
    }
}
