//! Bearer-token acquisition for outgoing requests.
//!
//! Token acquisition, refresh and storage live outside this crate; the
//! executor only asks the injected provider for the current token at call
//! time.

use async_trait::async_trait;

/// Source of the bearer token attached to every outgoing request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return the current bearer token.
    async fn bearer_token(&self) -> String;
}

/// Fixed-token provider for tests and single-credential setups.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn bearer_token(&self) -> String {
        self.0.clone()
    }
}

/// Zero-argument closures returning a token work as providers directly.
#[async_trait]
impl<F> TokenProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    async fn bearer_token(&self) -> String {
        (self)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_token_returns_value() {
        let provider = StaticToken("abc123".to_string());
        assert_eq!(provider.bearer_token().await, "abc123");
    }

    #[tokio::test]
    async fn closure_works_as_provider() {
        let provider = || "from-closure".to_string();
        assert_eq!(provider.bearer_token().await, "from-closure");
    }
}
