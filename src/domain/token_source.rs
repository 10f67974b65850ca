use crate::domain::Token;
use crate::error::Error;
use async_trait::async_trait;
#[cfg(test)]
use mockall::mock;

/// Hands out a current bearer token on demand.
///
/// Implementations own any caching or refreshing; callers fetch once per use.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<Token, Error>;
}

#[cfg(test)]
mock! {
    pub TokenSource {}

    #[async_trait]
    impl TokenSource for TokenSource {
        async fn token(&self) -> Result<Token, Error>;
    }
}

/// A token source over a token issued and managed elsewhere.
#[derive(Clone, Debug)]
pub struct StaticTokenSource {
    token: Token,
}

impl StaticTokenSource {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_returns_the_same_token_every_time() {
        let source = StaticTokenSource::new(Token::new("abc123"));

        assert_eq!(source.token().await.unwrap().secret(), "abc123");
        assert_eq!(source.token().await.unwrap().secret(), "abc123");
    }
}
