//! Request execution: assembly, timeout enforcement, dispatch and callback
//! routing.

use crate::alert::AlertSink;
use crate::auth::TokenProvider;
use crate::error::{CallError, CallResult};
use crate::request::{RequestData, RequestOptions};
use crate::response::{ParsedBody, ResponseType};
use crate::url_builder::UrlBuilder;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Executes single HTTP requests built from per-call [`RequestOptions`].
///
/// Concurrent calls are fully independent: the executor holds no mutable
/// state and each call owns its own timeout timer.
pub struct RequestExecutor {
    client: Client,
    token_provider: Arc<dyn TokenProvider>,
    alert_sink: Option<Arc<dyn AlertSink>>,
}

impl RequestExecutor {
    /// Create an executor with the given token provider.
    pub fn new(token_provider: impl TokenProvider + 'static) -> CallResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            token_provider: Arc::new(token_provider),
            alert_sink: None,
        })
    }

    /// Attach a user-facing failure notification channel.
    pub fn with_alert_sink(mut self, sink: impl AlertSink + 'static) -> Self {
        self.alert_sink = Some(Arc::new(sink));
        self
    }

    /// Issue one request and route the outcome.
    ///
    /// Resolves to `Ok(Some(body))` on success statuses and `Ok(None)` on
    /// failure statuses, where the raw response goes to `on_error` when
    /// supplied. Transport failures, timeouts and body-decode failures are
    /// logged, alerted through the sink when one is configured, and returned
    /// as `Err`. Callers relying on errors for failure statuses must check
    /// for `None` or supply an `on_error` callback.
    pub async fn execute(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> CallResult<Option<ParsedBody>> {
        match self.run(url, options).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.report_failure(&err);
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        url: &str,
        mut options: RequestOptions,
    ) -> CallResult<Option<ParsedBody>> {
        let address = UrlBuilder::build(&options.base_url, url, options.params.as_ref());
        let method = Method::from_str(&options.method).map_err(|_| {
            CallError::InvalidRequest(format!("invalid HTTP method: {}", options.method))
        })?;

        let token = self.token_provider.bearer_token().await;
        let mut request = self
            .client
            .request(method, address.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", token));

        request = match options.data.take() {
            Some(RequestData::Json(data)) => request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&data)?),
            Some(RequestData::Multipart(form)) => request.multipart(form),
            None => request.header(CONTENT_TYPE, "application/json"),
        };

        tracing::debug!(%address, timeout_ms = options.timeout_ms, "dispatching request");
        let response = self.send(request, options.timeout_ms).await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), %address, "request completed with failure status");
            if let Some(on_error) = options.on_error.take() {
                on_error(response);
            }
            return Ok(None);
        }

        let parsed = decode(response, options.response_type).await?;
        if let Some(on_success) = options.on_success.take() {
            on_success(&parsed);
        }
        Ok(Some(parsed))
    }

    /// Send the request, racing it against a timer when a timeout is
    /// configured. A zero timeout awaits the send directly and creates no
    /// timer.
    async fn send(&self, request: RequestBuilder, timeout_ms: u64) -> CallResult<Response> {
        if timeout_ms == 0 {
            return Ok(request.send().await?);
        }

        // Timer expiry drops the send future, which aborts the in-flight
        // request. The timer itself is dropped on every settle path.
        match timeout(Duration::from_millis(timeout_ms), request.send()).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) if err.is_timeout() => Err(CallError::Timeout(format!(
                "request timed out after {}ms",
                timeout_ms
            ))),
            Ok(Err(err)) => Err(err.into()),
            Err(_) => Err(CallError::Timeout(format!(
                "request timed out after {}ms",
                timeout_ms
            ))),
        }
    }

    fn report_failure(&self, err: &CallError) {
        if err.is_timeout() {
            tracing::error!("request timed out: {}", err);
        } else {
            tracing::error!("request failed: {}", err);
        }
        if let Some(sink) = &self.alert_sink {
            sink.alert(&err.to_string());
        }
    }
}

async fn decode(response: Response, response_type: ResponseType) -> CallResult<ParsedBody> {
    let parsed = match response_type {
        ResponseType::Json => ParsedBody::Json(response.json().await?),
        ResponseType::Text => ParsedBody::Text(response.text().await?),
        ResponseType::Blob => ParsedBody::Blob(response.bytes().await?),
    };
    Ok(parsed)
}
