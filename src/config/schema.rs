//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Route table and matching policy.
    pub routing: RoutingConfig,

    /// Shared HTTP client settings.
    pub http: HttpConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// How overlapping patterns are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    /// First declared match wins, with no reordering of `*` routes. A leading
    /// `*` shadows everything after it. Opt-in, for tables written in match
    /// order.
    DeclarationOrder,
    /// Exact patterns are tried before the wildcard, whatever the order.
    #[default]
    SpecificFirst,
}

impl std::fmt::Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precedence::DeclarationOrder => write!(f, "declaration_order"),
            Precedence::SpecificFirst => write!(f, "specific_first"),
        }
    }
}

/// Routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Matching policy.
    pub precedence: Precedence,

    /// Accept tables where some routes can never match.
    pub allow_shadowing: bool,

    /// Route definitions in declaration order.
    pub routes: Vec<RouteConfig>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        // Declared wildcard-first, as the shipped front-end does.
        Self {
            precedence: Precedence::SpecificFirst,
            allow_shadowing: false,
            routes: vec![
                RouteConfig::new("*", "Main"),
                RouteConfig::new("/edit", "Edit"),
                RouteConfig::new("/profile", "Profile"),
            ],
        }
    }
}

/// A single path → view mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path (`/edit`) or `*`.
    pub path: String,

    /// Name of a registered view.
    pub view: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            view: view.into(),
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL that relative request paths are joined onto.
    pub base_url: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout_secs: 10,
            user_agent: concat!("userapp-shell/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
