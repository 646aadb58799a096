//! Address construction for outgoing requests.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use url::form_urlencoded;

/// Builds the full target address from base URL, path and query parameters.
pub struct UrlBuilder;

impl UrlBuilder {
    /// Concatenate base URL and path, then append the encoded query string
    /// when `params` is present.
    ///
    /// Base URL and path are joined verbatim; callers own the slash between
    /// them. An empty or absent parameter map appends nothing.
    pub fn build(
        base_url: &str,
        path: &str,
        params: Option<&IndexMap<String, JsonValue>>,
    ) -> String {
        let mut address = format!("{}{}", base_url, path);
        if let Some(params) = params {
            let query = Self::query_string(params);
            if !query.is_empty() {
                address.push('?');
                address.push_str(&query);
            }
        }
        address
    }

    /// URL-encode parameters pairwise, preserving the map's iteration order.
    ///
    /// String values encode their text as-is; other JSON values use their
    /// JSON display form (`1`, `true`, `null`).
    pub fn query_string(params: &IndexMap<String, JsonValue>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            match value {
                JsonValue::String(text) => query.append_pair(key, text),
                other => query.append_pair(key, &other.to_string()),
            };
        }
        query.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, JsonValue)]) -> IndexMap<String, JsonValue> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn encodes_params_in_iteration_order() {
        let params = params(&[("page", json!(1)), ("q", json!("a b"))]);
        assert_eq!(
            UrlBuilder::build("", "/search", Some(&params)),
            "/search?page=1&q=a+b"
        );
    }

    #[test]
    fn concatenates_base_url_and_path() {
        assert_eq!(
            UrlBuilder::build("https://api.example.com", "/api/users", None),
            "https://api.example.com/api/users"
        );
        assert_eq!(UrlBuilder::build("", "/api/users", None), "/api/users");
    }

    #[test]
    fn empty_params_append_nothing() {
        let empty = IndexMap::new();
        assert_eq!(UrlBuilder::build("", "/api/users", Some(&empty)), "/api/users");
    }

    #[test]
    fn non_string_values_use_json_form() {
        let params = params(&[
            ("flag", json!(true)),
            ("count", json!(42)),
            ("missing", json!(null)),
        ]);
        assert_eq!(
            UrlBuilder::query_string(&params),
            "flag=true&count=42&missing=null"
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let params = params(&[("redirect", json!("https://example.com/path?x=1&y=2"))]);
        assert_eq!(
            UrlBuilder::query_string(&params),
            "redirect=https%3A%2F%2Fexample.com%2Fpath%3Fx%3D1%26y%3D2"
        );
    }
}
