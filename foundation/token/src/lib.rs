use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

pub type TokenSourceError = Box<dyn Error + Send + Sync>;

#[async_trait]
pub trait TokenSource: Send + Sync + Debug {
    /// token returns the valid token, including the token type prefix (e.g. `Bearer xxx`).
    async fn token(&self) -> Result<String, TokenSourceError>;
}

pub trait TokenSourceProvider: Send + Sync + Debug {
    /// token_source returns the token source implementation
    fn token_source(&self) -> Arc<dyn TokenSource>;
}

/// Placeholder used when the caller has not configured credentials.
/// Every call made through it fails with an authentication error.
#[derive(Debug)]
pub struct NopeTokenSourceProvider {}

impl TokenSourceProvider for NopeTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        Arc::new(NopeTokenSource {})
    }
}

#[derive(Debug)]
struct NopeTokenSource {}

#[async_trait]
impl TokenSource for NopeTokenSource {
    async fn token(&self) -> Result<String, TokenSourceError> {
        Err("no token source provider is specified".into())
    }
}

/// StaticTokenSourceProvider always hands out the same token.
/// Useful for tests and for tokens obtained out of band.
#[derive(Debug, Clone)]
pub struct StaticTokenSourceProvider {
    token: Arc<StaticTokenSource>,
}

impl StaticTokenSourceProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(StaticTokenSource { value: token.into() }),
        }
    }
}

impl TokenSourceProvider for StaticTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        self.token.clone()
    }
}

#[derive(Debug)]
struct StaticTokenSource {
    value: String,
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<String, TokenSourceError> {
        Ok(self.value.clone())
    }
}
