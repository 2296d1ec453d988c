//! Name-to-backend VFS registry
//!
//! A registry is a plain value supplied by the host for each call; this
//! crate keeps no process-wide registration state. Lookup is a pure
//! function of (name, registry snapshot) and performs no I/O.

use super::Vfs;
use ahash::AHashMap;
use std::sync::Arc;

/// Registry of VFS backends keyed by name, with a designated default
///
/// # Examples
///
/// ```rust
/// use vfsio_rs::vfs::{MemoryVfs, VfsRegistry};
/// use std::sync::Arc;
///
/// let mut registry = VfsRegistry::new();
/// registry.register(Arc::new(MemoryVfs::new("mem")));
/// registry.set_default("mem");
///
/// assert!(registry.resolve(None).is_some());
/// assert!(registry.resolve(Some("mem")).is_some());
/// assert!(registry.resolve(Some("s3")).is_none());
/// ```
#[derive(Default, Clone)]
pub struct VfsRegistry {
    backends: AHashMap<String, Arc<dyn Vfs>>,
    default: Option<String>,
}

impl VfsRegistry {
    /// Create an empty registry with no default
    pub fn new() -> Self {
        VfsRegistry {
            backends: AHashMap::new(),
            default: None,
        }
    }

    /// Register a backend under its own name
    ///
    /// The first backend registered becomes the default until
    /// [`set_default`](Self::set_default) says otherwise. Registering a
    /// second backend under an existing name replaces the first.
    pub fn register(&mut self, vfs: Arc<dyn Vfs>) {
        let name = vfs.name().to_string();
        if self.default.is_none() {
            self.default = Some(name.clone());
        }
        self.backends.insert(name, vfs);
    }

    /// Designate the default backend for lookups without a name
    ///
    /// Has no effect if no backend with that name is registered.
    pub fn set_default(&mut self, name: &str) {
        if self.backends.contains_key(name) {
            self.default = Some(name.to_string());
        }
    }

    /// Resolve an optional name to a backend
    ///
    /// `None` resolves to the default backend; `Some(name)` to the
    /// backend registered under that exact name. Returns `None` when
    /// nothing matches, which callers surface as a resolution error
    /// distinct from I/O failures.
    pub fn resolve(&self, name: Option<&str>) -> Option<Arc<dyn Vfs>> {
        let name = match name {
            Some(n) => n,
            None => self.default.as_deref()?,
        };
        self.backends.get(name).cloned()
    }

    /// Name of the current default backend, if any
    pub fn default_name(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryVfs;

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = VfsRegistry::new();
        assert!(registry.resolve(None).is_none());
        assert!(registry.resolve(Some("mem")).is_none());
    }

    #[test]
    fn test_first_registered_becomes_default() {
        let mut registry = VfsRegistry::new();
        registry.register(Arc::new(MemoryVfs::new("first")));
        registry.register(Arc::new(MemoryVfs::new("second")));

        assert_eq!(registry.default_name(), Some("first"));
        assert_eq!(registry.resolve(None).unwrap().name(), "first");
    }

    #[test]
    fn test_set_default_switches_unnamed_lookup() {
        let mut registry = VfsRegistry::new();
        registry.register(Arc::new(MemoryVfs::new("first")));
        registry.register(Arc::new(MemoryVfs::new("second")));
        registry.set_default("second");

        assert_eq!(registry.resolve(None).unwrap().name(), "second");
    }

    #[test]
    fn test_set_default_ignores_unknown_name() {
        let mut registry = VfsRegistry::new();
        registry.register(Arc::new(MemoryVfs::new("mem")));
        registry.set_default("missing");

        assert_eq!(registry.default_name(), Some("mem"));
    }

    #[test]
    fn test_named_lookup_is_exact() {
        let mut registry = VfsRegistry::new();
        registry.register(Arc::new(MemoryVfs::new("mem")));

        assert!(registry.resolve(Some("mem")).is_some());
        assert!(registry.resolve(Some("Mem")).is_none());
        assert!(registry.resolve(Some("mem2")).is_none());
    }
}
