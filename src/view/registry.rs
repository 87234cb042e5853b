//! Name → view lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::view::{PlaceholderView, View, ViewId};

/// Views known to the shell, keyed by name.
#[derive(Clone, Default)]
pub struct ViewRegistry {
    views: BTreeMap<ViewId, Arc<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three user-app pages as placeholders.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for name in ["Main", "Edit", "Profile"] {
            registry.register(name, PlaceholderView::new(name));
        }
        registry
    }

    /// Register (or replace) a view under `name`.
    pub fn register(&mut self, name: impl Into<String>, view: impl View + 'static) -> &mut Self {
        let id = ViewId::new(name);
        if self.views.insert(id.clone(), Arc::new(view)).is_some() {
            tracing::debug!(view = %id, "View replaced");
        }
        self
    }

    pub fn get(&self, id: &ViewId) -> Option<Arc<dyn View>> {
        self.views.get(id).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(&ViewId::new(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &ViewId> {
        self.views.keys()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.views.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_views() {
        let registry = ViewRegistry::with_builtin();
        let names: Vec<&str> = registry.names().map(|id| id.as_str()).collect();
        assert_eq!(names, vec!["Edit", "Main", "Profile"]);
        assert!(registry.contains("Main"));
        assert!(!registry.contains("Admin"));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ViewRegistry::with_builtin();
        registry.register("Main", PlaceholderView::new("Home"));
        assert_eq!(registry.names().count(), 3);
        assert!(registry.get(&ViewId::new("Main")).is_some());
    }
}
