use crate::response::{ParsedBody, ResponseType};
use indexmap::IndexMap;
use reqwest::multipart::Form;
use serde_json::Value as JsonValue;
use std::fmt;

/// Callback invoked with the decoded body on success-status responses.
pub type SuccessCallback = Box<dyn FnOnce(&ParsedBody) + Send>;

/// Callback invoked with the raw response on failure-status responses.
pub type ErrorCallback = Box<dyn FnOnce(reqwest::Response) + Send>;

/// Request body payload.
pub enum RequestData {
    /// Mapping serialized as the JSON body.
    Json(JsonValue),
    /// Raw binary form data; the client supplies the multipart content type
    /// and boundary.
    Multipart(Form),
}

impl fmt::Debug for RequestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestData::Json(data) => f.debug_tuple("Json").field(data).finish(),
            RequestData::Multipart(_) => f.write_str("Multipart(..)"),
        }
    }
}

/// Per-call request configuration.
///
/// Every invocation is stateless and independent; options are consumed by
/// the executor (callbacks run at most once).
pub struct RequestOptions {
    pub method: String,
    pub base_url: String,
    pub response_type: ResponseType,
    /// Query parameters; insertion order is the query-string order.
    pub params: Option<IndexMap<String, JsonValue>>,
    pub data: Option<RequestData>,
    /// 0 disables the timeout entirely; no timer is created.
    pub timeout_ms: u64,
    pub on_success: Option<SuccessCallback>,
    pub on_error: Option<ErrorCallback>,
}

impl RequestOptions {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: "POST".to_string(),
            base_url: String::new(),
            response_type: ResponseType::default(),
            params: None,
            data: None,
            timeout_ms: 0,
            on_success: None,
            on_error: None,
        }
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("method", &self.method)
            .field("base_url", &self.base_url)
            .field("response_type", &self.response_type)
            .field("params", &self.params)
            .field("data", &self.data)
            .field("timeout_ms", &self.timeout_ms)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
