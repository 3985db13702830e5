use async_trait::async_trait;
use shared_types::AppError;

/// Source of bearer tokens for the asset API.
///
/// Token acquisition and refresh live outside this crate (SSO library, host
/// page); the client only asks for the current token before each request.
#[async_trait(?Send)]
pub trait TokenProvider {
    /// The current access token, or `None` when the user is anonymous.
    async fn access_token(&self) -> Result<Option<String>, AppError>;
}

/// Provider that always returns the same token (or none).
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[async_trait(?Send)]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_token() {
        let provider = StaticTokenProvider::new(Some("t-1".into()));
        assert_eq!(provider.access_token().await.unwrap().as_deref(), Some("t-1"));
    }

    #[tokio::test]
    async fn blank_static_token_is_anonymous() {
        let provider = StaticTokenProvider::new(Some("  ".into()));
        assert!(provider.access_token().await.unwrap().is_none());
    }
}
