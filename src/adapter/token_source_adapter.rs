use crate::domain::{Authorizer, Token, TokenSource};
use crate::error::{Error, HeaderErrorExt};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::Request;
use log::{debug, error};

const BEARER_SCHEME: &str = "Bearer";

/// Presents an [`Authorizer`] as a [`TokenSource`].
///
/// Each call runs the authorizer against a blank request and reads the bearer token back out of
/// the `Authorization` header it sets.
#[derive(Clone, Debug)]
pub struct TokenSourceAdapter<A>
where
    A: Authorizer,
{
    authorizer: A,
}

impl<A> TokenSourceAdapter<A>
where
    A: Authorizer,
{
    pub fn new(authorizer: Option<A>) -> Result<Self, Error> {
        match authorizer {
            Some(authorizer) => Ok(Self { authorizer }),
            None => {
                error!("Cannot construct a token source without an authorizer");
                Err(Error::InvalidInput("an authorizer is required".to_string()))
            }
        }
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }
}

#[async_trait]
impl<A> TokenSource for TokenSourceAdapter<A>
where
    A: Authorizer,
{
    async fn token(&self) -> Result<Token, Error> {
        let mut request = Request::new(());
        self.authorizer.decorate(&mut request).await?;

        let header = request.headers().get(AUTHORIZATION).ok_or_else(|| {
            Error::TokenFetchFailed("authorizer did not set an Authorization header".to_string())
        })?;
        let header = header.to_str().map_err(|e| e.to_token_fetch_failed_error())?;
        let access_token = bearer_credentials(header).ok_or_else(|| {
            Error::TokenFetchFailed("authorizer did not set a bearer token".to_string())
        })?;

        debug!("Token read back from Authorization header");
        Ok(Token::new(access_token))
    }
}

fn bearer_credentials(header: &str) -> Option<&str> {
    let (scheme, credentials) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let credentials = credentials.trim();
    if credentials.is_empty() {
        None
    } else {
        Some(credentials)
    }
}
