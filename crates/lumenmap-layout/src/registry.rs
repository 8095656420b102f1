use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::shapes::ShapeDescription;

/// Append-only, insertion-ordered map from shape name to description.
///
/// Names are unique. [`insert_new`](Self::insert_new) is the only way in and
/// refuses names that are already taken; nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeRegistry {
    entries: IndexMap<String, ShapeDescription>,
}

impl ShapeRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`LayoutError::DuplicateShapeName`] if `name` is taken.
    pub fn ensure_vacant(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(LayoutError::DuplicateShapeName(name.to_owned()));
        }
        Ok(())
    }

    /// Inserts `description` under `name` unless the name is already taken.
    pub fn insert_new(
        &mut self,
        name: impl Into<String>,
        description: ShapeDescription,
    ) -> Result<&ShapeDescription> {
        let name = name.into();
        self.ensure_vacant(&name)?;
        let (index, _) = self.entries.insert_full(name, description);
        Ok(&self.entries[index])
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&ShapeDescription> {
        self.entries.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShapeDescription)> {
        self.entries.iter().map(|(name, desc)| (name.as_str(), desc))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(start: usize) -> ShapeDescription {
        ShapeDescription::Strip { width: 4, start }
    }

    #[test]
    fn insert_new_keeps_insertion_order() {
        let mut reg = ShapeRegistry::new();
        reg.insert_new("zeta", strip(0)).unwrap();
        reg.insert_new("alpha", strip(4)).unwrap();
        reg.insert_new("mid", strip(8)).unwrap();

        assert_eq!(reg.names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn insert_new_rejects_taken_name() {
        let mut reg = ShapeRegistry::new();
        reg.insert_new("s1", strip(0)).unwrap();

        let err = reg.insert_new("s1", strip(4)).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateShapeName(ref n) if n == "s1"));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("s1"), Some(&strip(0)));
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut reg = ShapeRegistry::new();
        reg.insert_new("s1", strip(0)).unwrap();
        let json = serde_json::to_string(&reg).unwrap();
        assert_eq!(json, r#"{"s1":{"type":"strip","width":4,"start":0}}"#);
    }
}
