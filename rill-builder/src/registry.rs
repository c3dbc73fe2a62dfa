//! Process-wide identifier registry.

use indexmap::IndexSet;

use crate::{Error, Result};

/// Set of element ids used anywhere in one process.
///
/// A single registry is lent to the top-level builder and to every
/// sub-process builder it spawns, so uniqueness holds across the whole tree
/// rather than per scope. Ids are never removed.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    ids: IndexSet<String>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`, failing if it is already taken.
    pub fn register(&mut self, id: &str) -> Result<()> {
        if self.ids.contains(id) {
            return Err(Error::DuplicateId { id: id.to_string() });
        }
        tracing::trace!(id, "registered element id");
        self.ids.insert(id.to_string());
        Ok(())
    }

    pub fn has(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Every registered id, in registration order.
    pub fn all(&self) -> &IndexSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_has() {
        let mut registry = ElementRegistry::new();
        registry.register("start").unwrap();

        assert!(registry.has("start"));
        assert!(!registry.has("end"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = ElementRegistry::new();
        registry.register("task").unwrap();

        let err = registry.register("task").unwrap_err();
        assert!(matches!(err, Error::DuplicateId { ref id } if id == "task"));
        assert_eq!(err.to_string(), "Duplicate element ID: \"task\"");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_all_keeps_registration_order() {
        let mut registry = ElementRegistry::new();
        for id in ["c", "a", "b"] {
            registry.register(id).unwrap();
        }

        let ids: Vec<&str> = registry.all().iter().map(String::as_str).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ElementRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }
}
