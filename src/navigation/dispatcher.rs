//! Route dispatcher.
//!
//! # Responsibilities
//! - Resolve each navigation through the route table
//! - Render the selected view into the mount target
//! - Keep session history in step with what is mounted
//! - Consume navigation events until the source closes or shutdown fires
//!
//! # Design Decisions
//! - One dispatcher owns the mount region; events are serialized through
//!   a single channel, so there is never more than one active view
//! - Navigating to the location already shown never re-renders; a push is
//!   dropped and a replace only rewrites the history entry. Locations
//!   compare on path, query and fragment, with only the trailing slash
//!   of the path normalized
//! - A failed navigation leaves the mounted view and history untouched

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::http::HttpClient;
use crate::navigation::history::{History, HistoryEntry, NavigationKind};
use crate::navigation::{NavigationError, NavigationEvent};
use crate::observability::metrics;
use crate::routing::{normalize_path, RouteTable};
use crate::view::{MountTarget, ViewContext, ViewId, ViewRegistry};

pub struct Dispatcher<M: MountTarget> {
    table: Arc<RouteTable>,
    views: ViewRegistry,
    http: Arc<HttpClient>,
    mount: M,
    history: History,
}

impl<M: MountTarget> Dispatcher<M> {
    pub fn new(table: Arc<RouteTable>, views: ViewRegistry, http: Arc<HttpClient>, mount: M) -> Self {
        Self {
            table,
            views,
            http,
            mount,
            history: History::new(),
        }
    }

    /// Navigate to `path`, adding a history entry.
    pub fn navigate(&mut self, path: &str) -> Result<ViewId, NavigationError> {
        if let Some(view) = self.already_at(path) {
            tracing::debug!(path = %path, "Already at location, skipping navigation");
            return Ok(view);
        }
        let view = self.show(path, NavigationKind::Push)?;
        self.history.push(HistoryEntry {
            path: path.to_string(),
            view: view.clone(),
        });
        Ok(view)
    }

    /// Navigate to `path`, overwriting the current history entry.
    pub fn replace(&mut self, path: &str) -> Result<ViewId, NavigationError> {
        let view = match self.already_at(path) {
            Some(view) => {
                tracing::debug!(path = %path, "Already at location, rewriting history entry only");
                view
            }
            None => self.show(path, NavigationKind::Replace)?,
        };
        self.history.replace(HistoryEntry {
            path: path.to_string(),
            view: view.clone(),
        });
        Ok(view)
    }

    /// Step back in history. `None` when already at the oldest entry.
    pub fn back(&mut self) -> Result<Option<ViewId>, NavigationError> {
        let Some(path) = self.history.back().map(|e| e.path.clone()) else {
            return Ok(None);
        };
        self.show(&path, NavigationKind::Back).map(Some)
    }

    /// Step forward in history. `None` when already at the newest entry.
    pub fn forward(&mut self) -> Result<Option<ViewId>, NavigationError> {
        let Some(path) = self.history.forward().map(|e| e.path.clone()) else {
            return Ok(None);
        };
        self.show(&path, NavigationKind::Forward).map(Some)
    }

    /// Apply one navigation event.
    pub fn handle(&mut self, event: NavigationEvent) -> Result<Option<ViewId>, NavigationError> {
        match event {
            NavigationEvent::Push(path) => self.navigate(&path).map(Some),
            NavigationEvent::Replace(path) => self.replace(&path).map(Some),
            NavigationEvent::Back => self.back(),
            NavigationEvent::Forward => self.forward(),
        }
    }

    /// Process events until the channel closes or shutdown is signalled.
    pub async fn run(
        &mut self,
        mut events: mpsc::Receiver<NavigationEvent>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        tracing::info!(routes = self.table.len(), "Dispatcher started");

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, dispatcher stopping");
                    break;
                }
                event = events.recv() => {
                    let Some(event) = event else {
                        tracing::debug!("Navigation source closed");
                        break;
                    };
                    if let Err(e) = self.handle(event) {
                        tracing::warn!(error = %e, "Navigation failed");
                    }
                }
            }
        }

        tracing::info!("Dispatcher stopped");
    }

    /// View of the current entry when it is the same location as `path`.
    fn already_at(&self, path: &str) -> Option<ViewId> {
        self.history
            .current()
            .filter(|current| same_location(&current.path, path))
            .map(|current| current.view.clone())
    }

    /// Resolve and mount; does not touch history.
    fn show(&mut self, path: &str, kind: NavigationKind) -> Result<ViewId, NavigationError> {
        let matched = self.table.resolve(path)?;
        let view_id = matched.route.view.clone();
        let view = self
            .views
            .get(&view_id)
            .ok_or_else(|| NavigationError::UnknownView(view_id.clone()))?;

        let ctx = ViewContext {
            path: path.to_string(),
            pattern: matched.route.pattern.to_string(),
            http: self.http.clone(),
        };
        let rendered = view.render(&ctx);
        self.mount.mount(&view_id, rendered);

        metrics::record_navigation(view_id.as_str(), kind.as_str());
        tracing::info!(
            path = %path,
            pattern = %ctx.pattern,
            view = %view_id,
            kind = %kind,
            "Navigated"
        );

        Ok(view_id)
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

/// `/edit/?tab=a` and `/edit?tab=a` are the same location; `/edit?tab=b` is not.
fn same_location(a: &str, b: &str) -> bool {
    fn split(raw: &str) -> (&str, &str) {
        let at = raw.find(['?', '#']).unwrap_or(raw.len());
        (normalize_path(&raw[..at]), &raw[at..])
    }
    split(a) == split(b)
}
