use chrono::{DateTime, TimeDelta, Utc};
use derive_getters::Getters;
use log::debug;
use oauth2::basic::{BasicTokenResponse, BasicTokenType};
use oauth2::{AccessToken, TokenResponse};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A bearer token as handed out by a [`TokenSource`](crate::domain::TokenSource).
///
/// The access token is kept in an [`AccessToken`] so it never shows up in `Debug` output.
#[derive(Clone, Debug, Deserialize, Getters, Serialize)]
pub struct Token {
    access_token: AccessToken,
    token_type: BasicTokenType,
    expires_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Token {
            access_token: AccessToken::new(access_token.into()),
            token_type: BasicTokenType::Bearer,
            expires_at: None,
        }
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn secret(&self) -> &str {
        self.access_token.secret()
    }

    /// True when the access token is blank, whitespace included.
    pub fn is_empty(&self) -> bool {
        self.access_token.secret().trim().is_empty()
    }

    fn from_response(response: &BasicTokenResponse) -> Self {
        debug!("Token::from_response {:?}", response);
        let max = TimeDelta::days(365);
        Token {
            access_token: response.access_token().clone(),
            token_type: response.token_type().clone(),
            expires_at: response.expires_in().map(|duration| {
                Utc::now()
                    .checked_add_signed(TimeDelta::from_std(duration).unwrap_or(max))
                    .unwrap_or(Utc::now().add(max))
            }),
        }
    }
}

impl From<&BasicTokenResponse> for Token {
    fn from(response: &BasicTokenResponse) -> Self {
        Token::from_response(response)
    }
}

impl From<BasicTokenResponse> for Token {
    fn from(response: BasicTokenResponse) -> Self {
        Token::from_response(&response)
    }
}
