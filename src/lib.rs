//! User-app front-end shell.
//!
//! Routes navigation paths to views and sends every view-initiated HTTP
//! request through a credential-forwarding interceptor chain.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod view;

pub use config::ShellConfig;
pub use error::ShellError;
pub use lifecycle::{Shell, ShellBuilder, Shutdown};
