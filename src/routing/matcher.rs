//! Route pattern matching logic.
//!
//! # Responsibilities
//! - Parse configured patterns into exact or wildcard matchers
//! - Normalize navigation paths before comparison
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Query string and fragment never take part in matching
//! - `/edit` and `/edit/` are the same route
//! - Only a bare `*` is a wildcard; no globbing inside segments

use crate::routing::RoutingError;

/// Trait for matching navigation paths against a pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the normalized path matches this condition.
    fn matches(&self, path: &str) -> bool;

    /// Whether this matcher claims every path.
    fn is_catch_all(&self) -> bool {
        false
    }
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePattern {
    /// Literal path, stored normalized.
    Exact(String),
    /// `*`: any path.
    Wildcard,
}

impl RoutePattern {
    pub const WILDCARD: &'static str = "*";

    /// Parse a pattern from configuration.
    pub fn parse(raw: &str) -> Result<Self, RoutingError> {
        let raw = raw.trim();
        if raw == Self::WILDCARD {
            return Ok(RoutePattern::Wildcard);
        }
        if raw.is_empty() {
            return Err(RoutingError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "pattern is empty",
            });
        }
        if !raw.starts_with('/') {
            return Err(RoutingError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "pattern must start with '/' or be '*'",
            });
        }
        if raw.contains('*') {
            return Err(RoutingError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "'*' is only allowed as a whole pattern",
            });
        }
        if raw.contains(['?', '#']) {
            return Err(RoutingError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "pattern must not carry a query or fragment",
            });
        }
        Ok(RoutePattern::Exact(normalize_path(raw).to_string()))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, RoutePattern::Wildcard)
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutePattern::Exact(path) => f.write_str(path),
            RoutePattern::Wildcard => f.write_str(Self::WILDCARD),
        }
    }
}

impl Matcher for RoutePattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(expected) => expected == path,
            RoutePattern::Wildcard => true,
        }
    }

    fn is_catch_all(&self) -> bool {
        self.is_wildcard()
    }
}

/// Strip query and fragment, map empty to `/`, drop one trailing slash.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    if path.is_empty() || path == "/" {
        return "/";
    }
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}
