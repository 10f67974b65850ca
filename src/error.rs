use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A required collaborator was missing at construction time.
    InvalidInput(String),
    /// The wrapped token source failed or handed back an unusable token.
    TokenFetchFailed(String),
    /// Raised by token source implementations.
    Source(String),
    /// Raised by request preparers further down a pipeline.
    Preparation(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(message) => write!(f, "InvalidInput: {}", message),
            Error::TokenFetchFailed(message) => write!(f, "TokenFetchFailed: {}", message),
            Error::Source(message) => write!(f, "Source: {}", message),
            Error::Preparation(message) => write!(f, "Preparation: {}", message),
        }
    }
}

impl std::error::Error for Error {}

pub trait ErrorExt {
    fn to_token_fetch_failed_error(&self) -> Error;
}

impl ErrorExt for Error {
    fn to_token_fetch_failed_error(&self) -> Error {
        match self {
            Error::TokenFetchFailed(_) => self.clone(),
            Error::InvalidInput(message)
            | Error::Source(message)
            | Error::Preparation(message) => Error::TokenFetchFailed(message.clone()),
        }
    }
}

pub trait HeaderErrorExt {
    fn to_token_fetch_failed_error(&self) -> Error;
}

impl HeaderErrorExt for http::header::InvalidHeaderValue {
    fn to_token_fetch_failed_error(&self) -> Error {
        Error::TokenFetchFailed(format!("access token is not a valid header value: {}", self))
    }
}

impl HeaderErrorExt for http::header::ToStrError {
    fn to_token_fetch_failed_error(&self) -> Error {
        Error::TokenFetchFailed(format!("Authorization header is not visible ASCII: {}", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod to_token_fetch_failed_error {
        use super::*;

        #[test]
        fn keeps_token_fetch_failures() {
            let error = Error::TokenFetchFailed("expired".to_string());

            assert_eq!(error.to_token_fetch_failed_error(), error);
        }

        #[test]
        fn wraps_source_failures() {
            let error = Error::Source("identity provider unreachable".to_string());

            assert_eq!(
                error.to_token_fetch_failed_error(),
                Error::TokenFetchFailed("identity provider unreachable".to_string())
            );
        }
    }

    #[test]
    fn display_names_the_kind() {
        assert_eq!(
            Error::InvalidInput("token source is required".to_string()).to_string(),
            "InvalidInput: token source is required"
        );
    }
}
