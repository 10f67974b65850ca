mod authorizer;
mod bearer;
mod token;
mod token_source;

pub use authorizer::{
    AuthorizationDecorator, AuthorizedPreparer, Authorizer, PrepareDecorator, Preparer,
};
pub use bearer::{BearerCallback, BearerFuture};
pub use token::Token;
#[cfg(test)]
pub(crate) use token_source::MockTokenSource;
pub use token_source::{StaticTokenSource, TokenSource};
