//! Adapter registry storage

use crate::adapter::Adapter;
use council_fs::NormalizedPath;
use std::collections::HashMap;

/// Central registry of tool adapters.
///
/// Lookup by name, sorted enumeration and auto-detection.
pub struct AdapterRegistry {
    adapters: HashMap<String, Box<dyn Adapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in adapters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for adapter in super::builtins::builtin_adapters() {
            registry.register(adapter);
        }
        registry
    }

    /// Register an adapter. A later registration under the same name
    /// replaces the earlier one.
    pub fn register(&mut self, adapter: Box<dyn Adapter>) {
        let name = adapter.name().to_string();
        if self.adapters.insert(name.clone(), adapter).is_some() {
            tracing::debug!("Replaced adapter registration for {}", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Adapter> {
        self.adapters.get(name).map(|a| a.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// All registered names (sorted).
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.adapters.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// All adapters, sorted by name.
    pub fn all(&self) -> Vec<&dyn Adapter> {
        self.names()
            .into_iter()
            .filter_map(|name| self.get(name))
            .collect()
    }

    /// Adapters whose tool is present under `root`, sorted by name.
    ///
    /// The fallback adapter is never part of the result.
    pub fn detect(&self, root: &NormalizedPath) -> Vec<&dyn Adapter> {
        self.all()
            .into_iter()
            .filter(|a| !a.is_fallback() && a.detect(root))
            .collect()
    }

    /// The fallback adapter, the first by name when several claim the role.
    pub fn fallback(&self) -> Option<&dyn Adapter> {
        self.all().into_iter().find(|a| a.is_fallback())
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
