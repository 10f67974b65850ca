use crate::error::Error;
use async_trait::async_trait;
use http::Request;

/// One stage of a request-preparation pipeline.
#[async_trait]
pub trait Preparer<B>: Send + Sync
where
    B: Send + 'static,
{
    async fn prepare(&self, request: Request<B>) -> Result<Request<B>, Error>;
}

#[async_trait]
impl<B, F> Preparer<B> for F
where
    B: Send + 'static,
    F: Fn(Request<B>) -> Result<Request<B>, Error> + Send + Sync,
{
    async fn prepare(&self, request: Request<B>) -> Result<Request<B>, Error> {
        self(request)
    }
}

/// Wraps a downstream [`Preparer`] in another one, in the manner of a middleware layer.
pub trait PrepareDecorator<P> {
    type Preparer;

    fn wrap(&self, next: P) -> Self::Preparer;
}

/// Attaches credentials to outgoing requests.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Sets the `Authorization` header on `request`.
    ///
    /// On error the request is left exactly as it was passed in.
    async fn decorate<B: Send>(&self, request: &mut Request<B>) -> Result<(), Error>;

    /// A decorator that authorizes each request before handing it to the next stage.
    fn with_authorization(&self) -> AuthorizationDecorator<Self>
    where
        Self: Sized + Clone,
    {
        AuthorizationDecorator {
            authorizer: self.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthorizationDecorator<A> {
    authorizer: A,
}

impl<A, P> PrepareDecorator<P> for AuthorizationDecorator<A>
where
    A: Authorizer + Clone,
{
    type Preparer = AuthorizedPreparer<A, P>;

    fn wrap(&self, next: P) -> AuthorizedPreparer<A, P> {
        AuthorizedPreparer {
            authorizer: self.authorizer.clone(),
            next,
        }
    }
}

/// Runs [`Authorizer::decorate`] and then the wrapped stage. The wrapped stage is skipped when
/// decoration fails.
#[derive(Clone, Debug)]
pub struct AuthorizedPreparer<A, P> {
    authorizer: A,
    next: P,
}

#[async_trait]
impl<A, P, B> Preparer<B> for AuthorizedPreparer<A, P>
where
    A: Authorizer,
    P: Preparer<B>,
    B: Send + 'static,
{
    async fn prepare(&self, mut request: Request<B>) -> Result<Request<B>, Error> {
        self.authorizer.decorate(&mut request).await?;
        self.next.prepare(request).await
    }
}
