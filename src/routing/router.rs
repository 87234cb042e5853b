//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the matching route for a navigation path
//! - Report routes that can never be selected
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(1) exact lookup via HashMap under `SpecificFirst`
//! - O(n) scan under `DeclarationOrder` (route tables are tiny)
//! - Explicit NoMatch rather than silent default

use std::collections::HashMap;

use crate::config::{Precedence, RouteConfig};
use crate::routing::matcher::{normalize_path, Matcher, RoutePattern};
use crate::routing::RoutingError;
use crate::view::ViewId;

/// A compiled route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub view: ViewId,
}

/// Result of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    /// Position of the route in declaration order.
    pub index: usize,
}

/// Immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    precedence: Precedence,
    /// Normalized exact path -> first declaring index.
    exact: HashMap<String, usize>,
    /// First declared wildcard.
    fallback: Option<usize>,
}

impl RouteTable {
    /// Compile routes from configuration, keeping declaration order.
    pub fn from_config(
        routes: &[RouteConfig],
        precedence: Precedence,
    ) -> Result<Self, RoutingError> {
        let mut compiled = Vec::with_capacity(routes.len());
        let mut exact = HashMap::new();
        let mut fallback = None;

        for (index, cfg) in routes.iter().enumerate() {
            let pattern = RoutePattern::parse(&cfg.path)?;
            match &pattern {
                RoutePattern::Exact(path) => {
                    exact.entry(path.clone()).or_insert(index);
                }
                RoutePattern::Wildcard => {
                    fallback.get_or_insert(index);
                }
            }
            compiled.push(Route {
                pattern,
                view: ViewId::new(cfg.view.as_str()),
            });
        }

        tracing::debug!(
            routes = compiled.len(),
            precedence = %precedence,
            has_fallback = fallback.is_some(),
            "Route table compiled"
        );

        Ok(Self {
            routes: compiled,
            precedence,
            exact,
            fallback,
        })
    }

    /// Select the route for `path`.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_>, RoutingError> {
        let normalized = normalize_path(path);

        let index = match self.precedence {
            Precedence::DeclarationOrder => self
                .routes
                .iter()
                .position(|route| route.pattern.matches(normalized)),
            Precedence::SpecificFirst => self.exact.get(normalized).copied().or(self.fallback),
        };

        match index {
            Some(index) => Ok(RouteMatch {
                route: &self.routes[index],
                index,
            }),
            None => Err(RoutingError::NoMatch {
                path: path.to_string(),
            }),
        }
    }

    /// Routes that no path can ever select under the current precedence.
    pub fn shadowed(&self) -> Vec<&Route> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(index, route)| !self.is_reachable(*index, route))
            .map(|(_, route)| route)
            .collect()
    }

    fn is_reachable(&self, index: usize, route: &Route) -> bool {
        match (&route.pattern, self.precedence) {
            (RoutePattern::Wildcard, _) => self.fallback == Some(index),
            (RoutePattern::Exact(path), Precedence::SpecificFirst) => {
                self.exact.get(path) == Some(&index)
            }
            (RoutePattern::Exact(path), Precedence::DeclarationOrder) => {
                let first_claim = self.routes[..index]
                    .iter()
                    .any(|earlier| earlier.pattern.matches(path));
                !first_claim
            }
        }
    }

    /// Whether every path resolves.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
