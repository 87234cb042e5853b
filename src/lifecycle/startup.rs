//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration against the registered views
//! - Compile the route table and report shadowed routes
//! - Assemble the interceptor chain and the shared HTTP client
//! - Hand back a ready dispatcher bound to a mount target
//!
//! # Design Decisions
//! - Everything is built in one call; nothing is registered globally
//! - Subsystems initialize in order: config, routes, HTTP, dispatcher
//! - CredentialPolicy is pushed after any caller-supplied interceptor,
//!   so no hook can switch credentials back off

use std::sync::Arc;

use crate::config::{validate_config, validate_views, ConfigError, ShellConfig};
use crate::error::ShellError;
use crate::http::client::parse_url;
use crate::http::{
    CredentialPolicy, HttpClient, Interceptor, InterceptorChain, ReqwestTransport,
    RequestIdInterceptor, Transport,
};
use crate::navigation::Dispatcher;
use crate::routing::RouteTable;
use crate::view::{MountTarget, ViewRegistry};

/// A booted shell.
pub struct Shell<M: MountTarget> {
    pub config: ShellConfig,
    pub dispatcher: Dispatcher<M>,
    pub http: Arc<HttpClient>,
    pub routes: Arc<RouteTable>,
}

/// Collects the collaborators, then boots the shell once.
pub struct ShellBuilder {
    config: ShellConfig,
    views: ViewRegistry,
    interceptors: InterceptorChain,
    transport: Option<Arc<dyn Transport>>,
}

impl ShellBuilder {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            views: ViewRegistry::with_builtin(),
            interceptors: InterceptorChain::new(),
            transport: None,
        }
    }

    /// Replace the view registry (defaults to the built-in placeholders).
    pub fn views(mut self, views: ViewRegistry) -> Self {
        self.views = views;
        self
    }

    /// Add a hook that runs before the credential policy.
    pub fn interceptor(mut self, hook: impl Interceptor + 'static) -> Self {
        self.interceptors.push(hook);
        self
    }

    /// Use a custom transport instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build<M: MountTarget>(self, mount: M) -> Result<Shell<M>, ShellError> {
        let Self {
            config,
            views,
            interceptors,
            transport,
        } = self;

        let mut problems = Vec::new();
        if let Err(errors) = validate_config(&config) {
            problems.extend(errors);
        }
        if let Err(errors) = validate_views(&config, &views) {
            problems.extend(errors);
        }
        if !problems.is_empty() {
            for problem in &problems {
                tracing::error!(error = %problem, "Invalid configuration");
            }
            return Err(ConfigError::Validation(problems).into());
        }

        let routes = Arc::new(RouteTable::from_config(
            &config.routing.routes,
            config.routing.precedence,
        )?);
        for route in routes.shadowed() {
            tracing::warn!(
                pattern = %route.pattern,
                view = %route.view,
                precedence = %routes.precedence(),
                "Route can never match"
            );
        }
        if !routes.has_fallback() {
            tracing::warn!("No wildcard route; unmatched paths will fail to navigate");
        }

        let mut chain = InterceptorChain::new();
        chain.push(RequestIdInterceptor);
        let chain = merge(chain, interceptors);

        let base_url = parse_url(&config.http.base_url)?;
        let transport: Arc<dyn Transport> = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config.http)?),
        };
        let http = Arc::new(HttpClient::new(base_url, chain, transport));

        tracing::info!(
            routes = routes.len(),
            precedence = %routes.precedence(),
            base_url = %http.base_url(),
            interceptors = ?http.interceptors().names(),
            "Shell initialized"
        );

        let dispatcher = Dispatcher::new(routes.clone(), views, http.clone(), mount);
        Ok(Shell {
            config,
            dispatcher,
            http,
            routes,
        })
    }
}

/// `head`, then `tail`, then the credential policy.
fn merge(mut head: InterceptorChain, tail: InterceptorChain) -> InterceptorChain {
    head.extend(tail);
    head.push(CredentialPolicy);
    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Precedence, RouteConfig};
    use crate::http::OutgoingRequest;
    use crate::view::MemoryMount;

    struct OptOut;

    impl Interceptor for OptOut {
        fn name(&self) -> &'static str {
            "opt_out"
        }

        fn intercept(&self, req: &mut OutgoingRequest) {
            req.credentials = false;
        }
    }

    #[test]
    fn test_build_default_shell() {
        let mut shell = ShellBuilder::new(ShellConfig::default())
            .build(MemoryMount::new())
            .unwrap();

        assert_eq!(
            shell.http.interceptors().names(),
            vec!["request_id", "credentials"]
        );
        assert_eq!(shell.dispatcher.navigate("/edit").unwrap().as_str(), "Edit");
        assert_eq!(shell.dispatcher.navigate("/anything").unwrap().as_str(), "Main");
    }

    #[test]
    fn test_credential_policy_runs_last() {
        let shell = ShellBuilder::new(ShellConfig::default())
            .interceptor(OptOut)
            .build(MemoryMount::new())
            .unwrap();

        assert_eq!(
            shell.http.interceptors().names(),
            vec!["request_id", "opt_out", "credentials"]
        );
        let mut req = shell.http.request(reqwest::Method::GET, "/profile").unwrap();
        shell.http.interceptors().apply(&mut req);
        assert!(req.credentials);
    }

    #[test]
    fn test_build_rejects_unknown_view_and_shadowing() {
        let mut config = ShellConfig::default();
        config.routing.precedence = Precedence::DeclarationOrder;
        config.routing.routes.push(RouteConfig::new("/admin", "Admin"));

        let err = ShellBuilder::new(config).build(MemoryMount::new()).err().unwrap();
        match err {
            ShellError::Config(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_allow_shadowing_boots_in_declaration_order() {
        let mut config = ShellConfig::default();
        config.routing.precedence = Precedence::DeclarationOrder;
        config.routing.allow_shadowing = true;

        let mut shell = ShellBuilder::new(config).build(MemoryMount::new()).unwrap();
        assert_eq!(shell.routes.shadowed().len(), 2);
        assert_eq!(shell.dispatcher.navigate("/edit").unwrap().as_str(), "Main");
    }
}
