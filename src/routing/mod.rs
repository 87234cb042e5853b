//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation path
//!     → matcher.rs (normalize path, evaluate patterns)
//!     → router.rs (precedence-aware lookup)
//!     → Return: matched Route or NoMatch
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Parse patterns (exact / wildcard)
//!     → Index exact paths, remember first wildcard
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Precedence is configuration, not an accident of list order
//! - Deterministic: same input always matches same route

use thiserror::Error;

pub mod matcher;
pub mod router;

pub use matcher::{normalize_path, Matcher, RoutePattern};
pub use router::{Route, RouteMatch, RouteTable};

/// Errors raised while compiling or querying the route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// No route claims the path and there is no wildcard.
    #[error("no route matches path '{path}'")]
    NoMatch { path: String },

    /// A configured pattern cannot be parsed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },
}
