//! REST API Client
//!
//! Typed functions over the backend's `/item` and `/order` endpoints.
//! Every call decodes the `{ success, data, meta? }` envelope and turns
//! non-success statuses or `{ success: false, error }` bodies into [`ApiError`].

mod query;

pub mod item;
pub mod order;

pub use query::to_query_string;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::PaginationMeta;

/// Backend base path, baked in at build time (`API_BASE_URL`)
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("/api")
}

pub fn api_path(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// The single failure kind surfaced to the UI
#[derive(Debug, Clone, PartialEq, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
        }
    }

    fn from_status(status: reqwest::StatusCode) -> Self {
        Self::new(format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("error")
        ))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Success/error envelope wrapping every backend response
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    meta: Option<PaginationMeta>,
    #[serde(default)]
    error: Option<ApiError>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<(T, Option<PaginationMeta>), ApiError> {
        if !self.success {
            return Err(self
                .error
                .unwrap_or_else(|| ApiError::new("Request failed")));
        }
        match self.data {
            Some(data) => Ok((data, self.meta)),
            None => Err(ApiError::new("Malformed response: missing data")),
        }
    }
}

/// Decode a response, mapping non-success statuses onto the error envelope
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<(T, Option<PaginationMeta>), ApiError> {
    let status = response.status();
    if !status.is_success() {
        let fallback = ApiError::from_status(status);
        let envelope: Envelope<serde_json::Value> = match response.json().await {
            Ok(envelope) => envelope,
            Err(_) => return Err(fallback),
        };
        return Err(envelope.error.unwrap_or(fallback));
    }
    let envelope: Envelope<T> = response.json().await?;
    envelope.into_result()
}

fn require_meta(meta: Option<PaginationMeta>) -> Result<PaginationMeta, ApiError> {
    meta.ok_or_else(|| ApiError::new("Malformed response: missing pagination meta"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn test_success_envelope_with_meta() {
        let envelope: Envelope<Vec<Item>> = serde_json::from_str(
            r#"{
                "success": true,
                "data": [{"itemId":1,"itemName":"Teh","price":5000,
                          "createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"}],
                "meta": {"page":1,"pageSize":10,"totalCount":1,"totalPages":1,
                         "hasNext":false,"hasPrevious":false}
            }"#,
        )
        .unwrap();
        let (data, meta) = envelope.into_result().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(require_meta(meta).unwrap().total_count, 1);
    }

    #[test]
    fn test_error_envelope_carries_code_and_details() {
        let envelope: Envelope<Item> = serde_json::from_str(
            r#"{
                "success": false,
                "error": {"message":"Item not found","code":"NOT_FOUND","details":{"itemId":99}}
            }"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message, "Item not found");
        assert_eq!(err.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(err.details.unwrap()["itemId"], 99);
        assert_eq!(
            ApiError::new("Item not found").to_string(),
            "Item not found"
        );
    }

    #[test]
    fn test_error_envelope_without_optional_fields() {
        let envelope: Envelope<Item> =
            serde_json::from_str(r#"{"success":false,"error":{"message":"boom"}}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message, "boom");
        assert_eq!(err.code, None);
        assert_eq!(err.details, None);
    }

    #[test]
    fn test_success_without_data_is_malformed() {
        let envelope: Envelope<Item> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(err.message.contains("missing data"));
    }
}
