mod authorizer_adapter;
mod token_source_adapter;

pub use authorizer_adapter::AuthorizerAdapter;
pub use token_source_adapter::TokenSourceAdapter;
