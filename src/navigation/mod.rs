//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Browser / programmatic navigation
//!     → NavigationEvent (mpsc channel)
//!     → dispatcher.rs (resolve, render, mount)
//!     → history.rs (session history)
//! ```

use thiserror::Error;

use crate::routing::RoutingError;
use crate::view::ViewId;

pub mod dispatcher;
pub mod history;

pub use dispatcher::Dispatcher;
pub use history::{History, HistoryEntry, NavigationKind};

/// A navigation request from the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(String),
    Replace(String),
    Back,
    Forward,
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// The route names a view that was never registered.
    #[error("view '{0}' is not registered")]
    UnknownView(ViewId),
}
