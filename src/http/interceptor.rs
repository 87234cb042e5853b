//! Pre-send interceptor chain.
//!
//! # Responsibilities
//! - Hold the ordered list of hooks registered at startup
//! - Run every hook on every outgoing request before it reaches the transport
//! - Provide the credential policy
//!
//! # Design Decisions
//! - Hooks are synchronous and infallible; they only mutate the request
//! - Chain is frozen once the client owns it (shared via Arc)
//! - Hooks run in registration order, so later hooks see earlier changes

use std::sync::Arc;

use crate::http::request::OutgoingRequest;

/// A hook invoked on every outgoing request prior to transmission.
pub trait Interceptor: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Mutate the request in place.
    fn intercept(&self, req: &mut OutgoingRequest);
}

/// Ordered set of interceptors.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    hooks: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook to the end of the chain.
    pub fn push(&mut self, hook: impl Interceptor + 'static) -> &mut Self {
        tracing::debug!(interceptor = hook.name(), position = self.hooks.len(), "Interceptor registered");
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Append every hook of `other`, keeping its order.
    pub fn extend(&mut self, other: InterceptorChain) -> &mut Self {
        self.hooks.extend(other.hooks);
        self
    }

    /// Run every hook, in order.
    pub fn apply(&self, req: &mut OutgoingRequest) {
        for hook in &self.hooks {
            hook.intercept(req);
            tracing::trace!(interceptor = hook.name(), url = %req.url, "Interceptor applied");
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Forces credentials onto every request. There is no opt-out.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialPolicy;

impl Interceptor for CredentialPolicy {
    fn name(&self) -> &'static str {
        "credentials"
    }

    fn intercept(&self, req: &mut OutgoingRequest) {
        req.credentials = true;
    }
}
