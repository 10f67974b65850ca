pub mod adapter;
pub mod core;
pub mod domain;
pub mod error;
mod main_impl;

pub use adapter::{AuthorizerAdapter, TokenSourceAdapter};
pub use error::Error;
pub use main_impl::{main_impl, CoreInterface, MainInterface};
