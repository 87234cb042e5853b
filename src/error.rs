//! Top-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::http::HttpError;
use crate::navigation::NavigationError;
use crate::routing::RoutingError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
