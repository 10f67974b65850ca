use crate::domain::{Authorizer, BearerCallback, BearerFuture, TokenSource};
use crate::error::{Error, ErrorExt, HeaderErrorExt};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderValue, Request};
use log::{debug, error};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

const BEARER_PREFIX: &str = "Bearer ";

/// Presents a [`TokenSource`] as an [`Authorizer`] and as a [`BearerCallback`].
///
/// The source is shared, not owned: the adapter never refreshes or caches tokens, and every
/// call fetches exactly once from the source.
pub struct AuthorizerAdapter<S>
where
    S: TokenSource + ?Sized,
{
    token_source: Arc<S>,
}

impl<S> AuthorizerAdapter<S>
where
    S: TokenSource + ?Sized,
{
    pub fn new(token_source: Option<Arc<S>>) -> Result<Self, Error> {
        match token_source {
            Some(token_source) => Ok(Self { token_source }),
            None => {
                error!("Cannot construct an authorizer without a token source");
                Err(Error::InvalidInput("a token source is required".to_string()))
            }
        }
    }

    pub fn token_source(&self) -> &Arc<S> {
        &self.token_source
    }

    /// The same delegation as [`Authorizer::decorate`], as a plain callback. Tenant and resource
    /// are accepted to fit the callback shape and otherwise ignored.
    pub fn as_callback(
        &self,
    ) -> impl Fn(&str, &str) -> BearerFuture + Clone + Send + Sync + 'static
    where
        S: 'static,
    {
        let token_source = self.token_source.clone();
        move |_tenant_id: &str, _resource: &str| -> BearerFuture {
            let token_source = token_source.clone();
            Box::pin(async move { fetch_access_token(token_source.as_ref()).await })
        }
    }
}

impl<S> From<Arc<S>> for AuthorizerAdapter<S>
where
    S: TokenSource + ?Sized,
{
    fn from(token_source: Arc<S>) -> Self {
        Self { token_source }
    }
}

impl<S> Debug for AuthorizerAdapter<S>
where
    S: TokenSource + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizerAdapter").finish_non_exhaustive()
    }
}

impl<S> Clone for AuthorizerAdapter<S>
where
    S: TokenSource + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            token_source: self.token_source.clone(),
        }
    }
}

#[async_trait]
impl<S> Authorizer for AuthorizerAdapter<S>
where
    S: TokenSource + ?Sized,
{
    async fn decorate<B: Send>(&self, request: &mut Request<B>) -> Result<(), Error> {
        let access_token = fetch_access_token(self.token_source.as_ref()).await?;
        let mut value = HeaderValue::from_str(&format!("{}{}", BEARER_PREFIX, access_token))
            .map_err(|e| e.to_token_fetch_failed_error())?;
        value.set_sensitive(true);

        request.headers_mut().insert(AUTHORIZATION, value);
        debug!(
            "Authorization header set for {} {}",
            request.method(),
            request.uri()
        );
        Ok(())
    }
}

#[async_trait]
impl<S> BearerCallback for AuthorizerAdapter<S>
where
    S: TokenSource + ?Sized,
{
    async fn bearer_token(&self, _tenant_id: &str, _resource: &str) -> Result<String, Error> {
        fetch_access_token(self.token_source.as_ref()).await
    }
}

async fn fetch_access_token<S>(token_source: &S) -> Result<String, Error>
where
    S: TokenSource + ?Sized,
{
    debug!("Fetching token...");
    let token = token_source.token().await.map_err(|e| {
        error!("Token source failed: {}", e);
        e.to_token_fetch_failed_error()
    })?;

    if token.is_empty() {
        error!("Token source returned an empty access token");
        return Err(Error::TokenFetchFailed(
            "token source returned an empty access token".to_string(),
        ));
    }
    HeaderValue::from_str(token.secret()).map_err(|e| {
        error!("Token source returned an access token that cannot be sent in a header");
        e.to_token_fetch_failed_error()
    })?;

    Ok(token.secret().to_string())
}
