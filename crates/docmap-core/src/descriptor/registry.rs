use std::collections::{HashMap, HashSet};

use super::types::TypeDescriptor;
use crate::error::CoreError;

/// Lookup table of every type the compiler may visit, keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, replacing any previous descriptor with the same name.
    pub fn register(&mut self, ty: TypeDescriptor) -> &mut Self {
        self.types.insert(ty.name.clone(), ty);
        self
    }

    pub fn get(&self, name: &str) -> Result<&TypeDescriptor, CoreError> {
        self.types
            .get(name)
            .ok_or_else(|| CoreError::UnknownType(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The inheritance chain of `name`, base-most type first and `name` last.
    pub fn hierarchy(&self, name: &str) -> Result<Vec<&TypeDescriptor>, CoreError> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(name);

        while let Some(type_name) = current {
            if !seen.insert(type_name) {
                return Err(CoreError::InheritanceCycle(type_name.to_string()));
            }
            let ty = self.get(type_name)?;
            chain.push(ty);
            current = ty.base.as_deref();
        }

        chain.reverse();
        Ok(chain)
    }
}

impl FromIterator<TypeDescriptor> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut registry = TypeRegistry::new();
        for ty in iter {
            registry.register(ty);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_is_base_first() {
        let registry: TypeRegistry = [
            TypeDescriptor::new("Entity"),
            TypeDescriptor::new("Animal").extends("Entity"),
            TypeDescriptor::new("Dog").extends("Animal"),
        ]
        .into_iter()
        .collect();

        let chain: Vec<&str> = registry
            .hierarchy("Dog")
            .unwrap()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(chain, vec!["Entity", "Animal", "Dog"]);
    }

    #[test]
    fn test_hierarchy_unknown_base() {
        let registry: TypeRegistry = [TypeDescriptor::new("Dog").extends("Animal")]
            .into_iter()
            .collect();
        let err = registry.hierarchy("Dog").unwrap_err();
        assert!(matches!(err, CoreError::UnknownType(name) if name == "Animal"));
    }

    #[test]
    fn test_hierarchy_cycle() {
        let registry: TypeRegistry = [
            TypeDescriptor::new("A").extends("B"),
            TypeDescriptor::new("B").extends("A"),
        ]
        .into_iter()
        .collect();
        assert!(matches!(
            registry.hierarchy("A"),
            Err(CoreError::InheritanceCycle(_))
        ));
    }
}
