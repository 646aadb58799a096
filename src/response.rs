use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Declared shape the response body is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Json,
    Text,
    Blob,
}

impl Default for ResponseType {
    fn default() -> Self {
        ResponseType::Json
    }
}

/// Decoded response body, tagged by the response type it was decoded as.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    Json(JsonValue),
    Text(String),
    Blob(Bytes),
}

impl ParsedBody {
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            ParsedBody::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParsedBody::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&Bytes> {
        match self {
            ParsedBody::Blob(bytes) => Some(bytes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_response_type_is_json() {
        assert_eq!(ResponseType::default(), ResponseType::Json);
    }

    #[test]
    fn response_type_serde_tags() {
        assert_eq!(serde_json::to_string(&ResponseType::Json).unwrap(), "\"json\"");
        assert_eq!(serde_json::to_string(&ResponseType::Blob).unwrap(), "\"blob\"");
        let parsed: ResponseType = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, ResponseType::Text);
    }

    #[test]
    fn accessors_match_variant() {
        let body = ParsedBody::Json(json!({"id": 1}));
        assert_eq!(body.as_json(), Some(&json!({"id": 1})));
        assert_eq!(body.as_text(), None);

        let body = ParsedBody::Text("hello".to_string());
        assert_eq!(body.as_text(), Some("hello"));
        assert_eq!(body.as_blob(), None);

        let body = ParsedBody::Blob(Bytes::from_static(b"\x00\x01"));
        assert_eq!(body.as_blob(), Some(&Bytes::from_static(b"\x00\x01")));
        assert_eq!(body.as_json(), None);
    }
}
