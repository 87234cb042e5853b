//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference registered views)
//! - Validate value ranges (timeouts > 0, URLs parse)
//! - Detect routes that can never be selected
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{Precedence, RouteConfig, ShellConfig};
use crate::routing::{RoutePattern, RouteTable};
use crate::view::ViewRegistry;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("routing.routes is empty")]
    NoRoutes,

    #[error("route #{index} has an invalid pattern: {reason}")]
    InvalidPattern { index: usize, reason: String },

    #[error("route pattern '{pattern}' is declared more than once")]
    DuplicatePattern { pattern: String },

    #[error("route '{pattern}' refers to unregistered view '{view}'")]
    UnknownView { pattern: String, view: String },

    #[error(
        "routes {shadowed:?} can never match under {precedence} precedence; \
         declare '*' last, use specific_first, or set routing.allow_shadowing"
    )]
    ShadowedRoutes {
        precedence: Precedence,
        shadowed: Vec<String>,
    },

    #[error("http.base_url '{0}' is not an absolute URL")]
    InvalidBaseUrl(String),

    #[error("http.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate everything that does not depend on registered views.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let routing = &config.routing;

    if routing.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen = HashSet::new();
    let mut all_parsed = true;
    for (index, route) in routing.routes.iter().enumerate() {
        match RoutePattern::parse(&route.path) {
            Ok(pattern) => {
                if !seen.insert(pattern.clone()) {
                    errors.push(ValidationError::DuplicatePattern {
                        pattern: pattern.to_string(),
                    });
                }
            }
            Err(e) => {
                all_parsed = false;
                errors.push(ValidationError::InvalidPattern {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    // Duplicates are already reported; only look for order-induced shadowing.
    if all_parsed && !routing.allow_shadowing {
        if let Ok(table) = RouteTable::from_config(&routing.routes, routing.precedence) {
            let mut reported = HashSet::new();
            let shadowed: Vec<String> = table
                .shadowed()
                .into_iter()
                .map(|route| route.pattern.to_string())
                .filter(|pattern| seen_once(&routing.routes, pattern) && reported.insert(pattern.clone()))
                .collect();
            if !shadowed.is_empty() {
                errors.push(ValidationError::ShadowedRoutes {
                    precedence: routing.precedence,
                    shadowed,
                });
            }
        }
    }

    match url::Url::parse(&config.http.base_url) {
        Ok(url) if !url.cannot_be_a_base() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.http.base_url.clone())),
    }

    if config.http.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that every route names a registered view.
pub fn validate_views(config: &ShellConfig, views: &ViewRegistry) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = config
        .routing
        .routes
        .iter()
        .filter(|route| !views.contains(&route.view))
        .map(|route| ValidationError::UnknownView {
            pattern: route.path.clone(),
            view: route.view.clone(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn seen_once(routes: &[RouteConfig], pattern: &str) -> bool {
    routes
        .iter()
        .filter_map(|r| RoutePattern::parse(&r.path).ok())
        .filter(|p| p.to_string() == pattern)
        .count()
        == 1
}
