use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Presents a pre-issued access token through request authorizers and bearer \
callbacks.", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Access token to present as a bearer token
    #[arg(long, env = "ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct HeaderArgs {
    /// URL of the request to authorize
    #[arg(short, long)]
    pub url: String,
    /// HTTP method of the request to authorize
    #[arg(short, long, default_value = "GET")]
    pub method: String,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct CallbackArgs {
    /// Tenant the token is requested for
    #[arg(short, long, default_value = "")]
    pub tenant_id: String,
    /// Resource the token is requested for
    #[arg(short, long)]
    pub resource: String,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Print the Authorization header of an authorized request
    Header(HeaderArgs),
    /// Print the token a bearer callback hands out
    Callback(CallbackArgs),
}
