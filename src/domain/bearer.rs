use crate::error::Error;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;

pub type BearerFuture = Pin<Box<dyn Future<Output = Result<String, Error>> + Send>>;

/// The callback shape used by vault-style clients: given a tenant and a resource, produce a raw
/// bearer token string.
#[async_trait]
pub trait BearerCallback: Send + Sync {
    async fn bearer_token(&self, tenant_id: &str, resource: &str) -> Result<String, Error>;
}
