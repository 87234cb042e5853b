//! View subsystem.
//!
//! # Data Flow
//! ```text
//! RouteMatch (view id)
//!     → registry.rs (look up the registered view)
//!     → View::render(ViewContext)
//!     → mount.rs (replace whatever the region showed before)
//! ```
//!
//! # Design Decisions
//! - Views are opaque collaborators; the shell only knows their names
//! - Views reach the network only through the shared HttpClient in
//!   their context, so the credential policy always applies

use std::sync::Arc;

use crate::http::HttpClient;

pub mod mount;
pub mod registry;

pub use mount::{MemoryMount, MountTarget};
pub use registry::ViewRegistry;

/// Name of a registered view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Output of a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub markup: String,
}

impl Rendered {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

/// What a view sees while rendering.
#[derive(Clone)]
pub struct ViewContext {
    /// Path as navigated, before normalization.
    pub path: String,
    /// Pattern of the route that selected the view.
    pub pattern: String,
    /// Shared credentialed client.
    pub http: Arc<HttpClient>,
}

/// A renderable unit bound to a route.
pub trait View: Send + Sync {
    fn render(&self, ctx: &ViewContext) -> Rendered;
}

/// Stand-in for a view whose contents live outside the shell.
#[derive(Debug, Clone)]
pub struct PlaceholderView {
    name: String,
}

impl PlaceholderView {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl View for PlaceholderView {
    fn render(&self, ctx: &ViewContext) -> Rendered {
        Rendered::new(format!("<{} path=\"{}\"/>", self.name, ctx.path))
    }
}
