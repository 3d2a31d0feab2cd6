//! # View Registry
//!
//! Views are opaque handles (component descriptors, render functions, plain
//! strings) bound to routes by `operationId`. Callers hand them over either as a
//! map keyed by operationId or as a list of views that carry their own name; both
//! forms are normalized into a [`ViewRegistry`].

use std::collections::HashMap;

/// A view that knows the operationId it should be bound to.
///
/// Used for the list form of view bindings. Views that return `None` are
/// not registered.
pub trait NamedView {
    fn view_name(&self) -> Option<&str>;
}

impl NamedView for String {
    fn view_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl NamedView for &str {
    fn view_name(&self) -> Option<&str> {
        Some(*self)
    }
}

impl<T: NamedView> NamedView for std::sync::Arc<T> {
    fn view_name(&self) -> Option<&str> {
        self.as_ref().view_name()
    }
}

/// Views keyed by operationId.
#[derive(Debug, Clone)]
pub struct ViewRegistry<V> {
    views: HashMap<String, V>,
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
        }
    }
}

impl<V> ViewRegistry<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the list form.
    ///
    /// Unnamed views are dropped; when two views share a name the later one wins.
    #[must_use]
    pub fn from_named<I>(views: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: NamedView,
    {
        let mut registry = Self::new();
        for view in views {
            if let Some(name) = view.view_name().map(str::to_owned) {
                registry.views.insert(name, view);
            }
        }
        registry
    }

    /// Register `view` under `operation_id`, replacing any previous binding.
    pub fn insert(&mut self, operation_id: impl Into<String>, view: V) -> Option<V> {
        self.views.insert(operation_id.into(), view)
    }

    #[must_use]
    pub fn get(&self, operation_id: &str) -> Option<&V> {
        self.views.get(operation_id)
    }

    #[must_use]
    pub fn contains(&self, operation_id: &str) -> bool {
        self.views.contains_key(operation_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl<V> From<HashMap<String, V>> for ViewRegistry<V> {
    fn from(views: HashMap<String, V>) -> Self {
        Self { views }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ViewRegistry<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            views: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
