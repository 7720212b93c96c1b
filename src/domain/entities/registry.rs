//! Classification registry entity
//!
//! The ordered collection of classification types backing the tree.
//! Iteration order is insertion order, except after an explicit
//! [`ClassificationRegistry::sort_by_name_ci`].

use super::classification::ClassificationType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationRegistry {
    types: Vec<ClassificationType>,
}

impl ClassificationRegistry {
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    pub fn from_types(types: impl IntoIterator<Item = ClassificationType>) -> Self {
        let mut registry = Self::new();
        for ty in types {
            registry.upsert(ty);
        }
        registry
    }

    /// Insert a type, replacing any existing type with the same name in place.
    pub fn upsert(&mut self, ty: ClassificationType) {
        if let Some(existing) = self.types.iter_mut().find(|t| t.name == ty.name) {
            *existing = ty;
        } else {
            self.types.push(ty);
        }
    }

    /// Replace the whole content, keeping the fetched order.
    pub fn replace_all(&mut self, types: impl IntoIterator<Item = ClassificationType>) {
        *self = Self::from_types(types);
    }

    pub fn get(&self, name: &str) -> Option<&ClassificationType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ClassificationType> {
        self.types.iter_mut().find(|t| t.name == name)
    }

    pub fn find_by_guid(&self, guid: &str) -> Option<&ClassificationType> {
        self.types.iter().find(|t| t.guid == guid)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove_by_guid(&mut self, guid: &str) -> Option<ClassificationType> {
        let idx = self.types.iter().position(|t| t.guid == guid)?;
        Some(self.types.remove(idx))
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<ClassificationType> {
        let idx = self.types.iter().position(|t| t.name == name)?;
        Some(self.types.remove(idx))
    }

    /// Record `child` in the `subTypes` of `parent`.
    ///
    /// Returns `false` if the parent is unknown or already lists the child.
    pub fn link_sub_type(&mut self, parent: &str, child: &str) -> bool {
        match self.get_mut(parent) {
            Some(parent) => parent.add_sub_type(child),
            None => false,
        }
    }

    /// Reorder by lowercase name. The order persists for later builds.
    pub fn sort_by_name_ci(&mut self) {
        self.types.sort_by_cached_key(|t| t.name.to_lowercase());
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassificationType> {
        self.types.iter()
    }

    pub fn roots(&self) -> impl Iterator<Item = &ClassificationType> {
        self.types.iter().filter(|t| t.is_root())
    }

    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn all(&self) -> &[ClassificationType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
