use crate::adapter::AuthorizerAdapter;
use crate::core::cli::{Cli, Command, HeaderArgs};
use crate::domain::{
    Authorizer, PrepareDecorator, Preparer, StaticTokenSource, Token, TokenSource,
};
use crate::error::Error;
use clap::Parser;
use http::header::AUTHORIZATION;
use http::Request;
use log::debug;
use std::sync::Arc;

pub async fn main_impl<Interface>() -> Result<(), String>
where
    Interface: MainInterface,
{
    // Make sure we never initialize the env_logger in unit tests.
    Interface::initialize_logging();

    debug!("Reading cli input...");
    let cli = Interface::get_cli();

    debug!("Constructing token source...");
    let token_source = Interface::construct_token_source(&cli);

    debug!("Constructing authorizer...");
    let authorizer = AuthorizerAdapter::new(token_source).map_err(|e| e.to_string())?;

    let output = match &cli.command {
        Command::Header(header_args) => {
            debug!("Authorizing request...");
            authorized_header(&authorizer, header_args).await
        }
        Command::Callback(callback_args) => {
            debug!("Calling bearer callback...");
            authorizer.as_callback()(
                callback_args.tenant_id.as_str(),
                callback_args.resource.as_str(),
            )
            .await
        }
    }
    .map_err(|e| e.to_string())?;

    Interface::write_output(&output);
    Ok(())
}

async fn authorized_header<S>(
    authorizer: &AuthorizerAdapter<S>,
    header_args: &HeaderArgs,
) -> Result<String, Error>
where
    S: TokenSource + ?Sized,
{
    let request = Request::builder()
        .method(header_args.method.as_str())
        .uri(header_args.url.as_str())
        .body(())
        .map_err(|e| Error::InvalidInput(format!("Invalid request: {}", e)))?;

    let request = authorizer
        .with_authorization()
        .wrap(|request: Request<()>| -> Result<Request<()>, Error> { Ok(request) })
        .prepare(request)
        .await?;

    let value = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    Ok(format!("Authorization: {}", value))
}

pub trait MainInterface {
    type Source: TokenSource + 'static;

    fn initialize_logging();
    fn get_cli() -> Cli;
    fn construct_token_source(cli: &Cli) -> Option<Arc<Self::Source>>;
    fn write_output(output: &str);
}

pub struct CoreInterface {}

impl MainInterface for CoreInterface {
    type Source = StaticTokenSource;

    fn initialize_logging() {
        env_logger::init()
    }

    fn get_cli() -> Cli {
        Cli::parse()
    }

    fn construct_token_source(cli: &Cli) -> Option<Arc<StaticTokenSource>> {
        cli.access_token.as_ref().map(|access_token| {
            Arc::new(StaticTokenSource::new(Token::new(access_token.clone())))
        })
    }

    fn write_output(output: &str) {
        println!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use parking_lot::Mutex;

    macro_rules! test_interface {
        ($name:ident, $token:expr, [$($arg:expr),* $(,)?]) => {
            struct $name {}

            impl $name {
                fn output() -> Vec<String> {
                    Self::outputs().lock().clone()
                }

                fn outputs() -> &'static Mutex<Vec<String>> {
                    static OUTPUTS: Lazy<Mutex<Vec<String>>> =
                        Lazy::new(|| Mutex::new(Vec::new()));
                    &OUTPUTS
                }
            }

            impl MainInterface for $name {
                type Source = StaticTokenSource;

                fn initialize_logging() {}

                fn get_cli() -> Cli {
                    Cli::try_parse_from(["authorizer_bridge", $($arg),*]).unwrap()
                }

                fn construct_token_source(_cli: &Cli) -> Option<Arc<StaticTokenSource>> {
                    let token: Option<&str> = $token;
                    token.map(|token| Arc::new(StaticTokenSource::new(Token::new(token))))
                }

                fn write_output(output: &str) {
                    Self::outputs().lock().push(output.to_string());
                }
            }
        };
    }

    mod header {
        use super::*;

        #[tokio::test]
        async fn prints_the_authorization_header() {
            test_interface!(
                TestInterface,
                Some("abc123"),
                ["header", "--url=https://graph.example/v1.0/users"]
            );

            main_impl::<TestInterface>().await.unwrap();

            assert_eq!(TestInterface::output(), vec!["Authorization: Bearer abc123"]);
        }

        #[tokio::test]
        async fn fails_without_a_token() {
            test_interface!(
                TestInterface,
                None,
                ["header", "--url=https://graph.example/v1.0/users"]
            );

            let result = main_impl::<TestInterface>().await;

            assert!(result.unwrap_err().starts_with("InvalidInput"));
            assert!(TestInterface::output().is_empty());
        }

        #[tokio::test]
        async fn fails_with_an_empty_token() {
            test_interface!(
                TestInterface,
                Some(""),
                ["header", "--url=https://graph.example/v1.0/users"]
            );

            let result = main_impl::<TestInterface>().await;

            assert!(result.unwrap_err().starts_with("TokenFetchFailed"));
            assert!(TestInterface::output().is_empty());
        }

        #[tokio::test]
        async fn rejects_an_invalid_method() {
            test_interface!(
                TestInterface,
                Some("abc123"),
                ["header", "--url=https://graph.example/", "--method=NOT A METHOD"]
            );

            let result = main_impl::<TestInterface>().await;

            assert!(result.unwrap_err().starts_with("InvalidInput"));
        }
    }

    mod callback {
        use super::*;

        #[tokio::test]
        async fn prints_the_token() {
            test_interface!(
                TestInterface,
                Some("abc123"),
                [
                    "callback",
                    "--tenant-id=tenant-x",
                    "--resource=https://vault.example/secrets"
                ]
            );

            main_impl::<TestInterface>().await.unwrap();

            assert_eq!(TestInterface::output(), vec!["abc123"]);
        }
    }
}
