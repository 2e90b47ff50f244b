use docmap_core::descriptor::{
    ClassBridgeDeclaration, EmbeddedDeclaration, FieldDeclaration, FilterDefinition, Index,
    Resolution, Store, DEFAULT_PREFIX,
};

use crate::error::FluentError;

/// The document id of a [`DocumentMap`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdPart {
    pub(crate) member: String,
    pub(crate) name: Option<String>,
    pub(crate) bridge: Option<String>,
    pub(crate) boost: Option<f32>,
}

impl IdPart {
    /// Index field name, when it differs from the member name.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    /// Bridge used for the id. Must be two-way.
    pub fn bridge(&mut self, bridge: &str) -> &mut Self {
        self.bridge = Some(bridge.to_string());
        self
    }

    pub fn boost(&mut self, boost: f32) -> &mut Self {
        self.boost = Some(boost);
        self
    }
}

/// One index field produced from a member. A member may be mapped to
/// several fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPart {
    pub(crate) member: String,
    pub(crate) declaration: FieldDeclaration,
    pub(crate) bridge: Option<String>,
    pub(crate) resolution: Option<Resolution>,
    pub(crate) boost: Option<f32>,
}

impl FieldPart {
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.declaration.name = Some(name.to_string());
        self
    }

    pub fn store(&mut self, store: Store) -> &mut Self {
        self.declaration.store = store;
        self
    }

    pub fn index(&mut self, index: Index) -> &mut Self {
        self.declaration.index = index;
        self
    }

    pub fn analyzer(&mut self, analyzer: &str) -> &mut Self {
        self.declaration.analyzer = Some(analyzer.to_string());
        self
    }

    pub fn bridge(&mut self, bridge: &str) -> &mut Self {
        self.bridge = Some(bridge.to_string());
        self
    }

    /// Index a date member at the given resolution.
    pub fn resolution(&mut self, resolution: Resolution) -> &mut Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn boost(&mut self, boost: f32) -> &mut Self {
        self.boost = Some(boost);
        self
    }
}

/// A member whose value is indexed as a nested document.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedPart {
    pub(crate) member: String,
    pub(crate) declaration: EmbeddedDeclaration,
    pub(crate) boost: Option<f32>,
}

impl EmbeddedPart {
    /// Type to embed instead of the member's declared element type.
    pub fn target_element(&mut self, type_name: &str) -> &mut Self {
        self.declaration.target_element = Some(type_name.to_string());
        self
    }

    pub fn prefix(&mut self, prefix: &str) -> &mut Self {
        self.declaration.prefix = prefix.to_string();
        self
    }

    /// `0` means unlimited.
    pub fn depth(&mut self, depth: u32) -> &mut Self {
        self.declaration.depth = Some(depth);
        self
    }

    pub fn boost(&mut self, boost: f32) -> &mut Self {
        self.boost = Some(boost);
        self
    }
}

/// A class bridge with its parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassBridgePart {
    pub(crate) declaration: ClassBridgeDeclaration,
    pub(crate) parameters: Vec<(String, String)>,
}

impl ClassBridgePart {
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.declaration.name = Some(name.to_string());
        self
    }

    pub fn boost(&mut self, boost: f32) -> &mut Self {
        self.declaration.boost = Some(boost);
        self
    }

    pub fn index(&mut self, index: Index) -> &mut Self {
        self.declaration.index = index;
        self
    }

    pub fn store(&mut self, store: Store) -> &mut Self {
        self.declaration.store = store;
        self
    }

    pub fn analyzer(&mut self, analyzer: &str) -> &mut Self {
        self.declaration.analyzer = Some(analyzer.to_string());
        self
    }

    pub fn parameter(&mut self, name: &str, value: &str) -> &mut Self {
        self.parameters.push((name.to_string(), value.to_string()));
        self
    }
}

/// Mapping declarations for one type, written in code.
///
/// Members are referred to by name; they must exist on the type's descriptor
/// for the compiler to pick them up.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMap {
    pub(crate) type_name: String,
    pub(crate) index_name: Option<String>,
    pub(crate) id: Option<IdPart>,
    pub(crate) fields: Vec<FieldPart>,
    pub(crate) embedded: Vec<EmbeddedPart>,
    pub(crate) contained_in: Vec<String>,
    pub(crate) class_bridges: Vec<ClassBridgePart>,
    pub(crate) filters: Vec<FilterDefinition>,
    pub(crate) analyzer: Option<String>,
    pub(crate) boost: Option<f32>,
}

impl DocumentMap {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            index_name: None,
            id: None,
            fields: Vec::new(),
            embedded: Vec::new(),
            contained_in: Vec::new(),
            class_bridges: Vec::new(),
            filters: Vec::new(),
            analyzer: None,
            boost: None,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Set the index name. Defaults to the type name.
    pub fn name(&mut self, index_name: &str) -> &mut Self {
        self.index_name = Some(index_name.to_string());
        self
    }

    /// Designate the document id member. Only one is allowed.
    pub fn id(&mut self, member: &str) -> Result<&mut IdPart, FluentError> {
        if let Some(existing) = &self.id {
            return Err(FluentError::IdAlreadySet {
                type_name: self.type_name.clone(),
                existing: existing.member.clone(),
                member: member.to_string(),
            });
        }
        Ok(self.id.insert(IdPart {
            member: member.to_string(),
            ..Default::default()
        }))
    }

    /// Map a member to an index field.
    pub fn map(&mut self, member: &str) -> &mut FieldPart {
        self.fields.push(FieldPart {
            member: member.to_string(),
            ..Default::default()
        });
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    /// Embed a member's value as a nested document.
    pub fn embedded(&mut self, member: &str) -> &mut EmbeddedPart {
        self.embedded.push(EmbeddedPart {
            member: member.to_string(),
            declaration: EmbeddedDeclaration {
                prefix: DEFAULT_PREFIX.to_string(),
                ..Default::default()
            },
            boost: None,
        });
        let last = self.embedded.len() - 1;
        &mut self.embedded[last]
    }

    /// Mark a member as pointing back to a containing document.
    pub fn contained_in(&mut self, member: &str) -> &mut Self {
        self.contained_in.push(member.to_string());
        self
    }

    /// Add a class bridge registered under `bridge`.
    pub fn bridge(&mut self, bridge: &str) -> &mut ClassBridgePart {
        self.class_bridges.push(ClassBridgePart {
            declaration: ClassBridgeDeclaration {
                bridge: bridge.to_string(),
                ..Default::default()
            },
            parameters: Vec::new(),
        });
        let last = self.class_bridges.len() - 1;
        &mut self.class_bridges[last]
    }

    pub fn analyzer(&mut self, analyzer: &str) -> &mut Self {
        self.analyzer = Some(analyzer.to_string());
        self
    }

    pub fn boost(&mut self, boost: f32) -> &mut Self {
        self.boost = Some(boost);
        self
    }

    /// Declare a full-text filter. Results are cached unless `cache` is false.
    pub fn filter(&mut self, name: &str, implementation: &str, cache: bool) -> &mut Self {
        self.filters.push(FilterDefinition {
            name: name.to_string(),
            implementation: implementation.to_string(),
            cache,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_set_once() {
        let mut map = DocumentMap::new("Contact");
        map.id("Id").unwrap().name("contact_id");

        let err = map.id("Key").unwrap_err();
        assert!(matches!(
            err,
            FluentError::IdAlreadySet { ref existing, ref member, .. }
                if existing == "Id" && member == "Key"
        ));
        assert_eq!(map.id.as_ref().unwrap().name.as_deref(), Some("contact_id"));
    }

    #[test]
    fn test_chained_parts() {
        let mut map = DocumentMap::new("Contact");
        map.name("contacts").boost(1.2).analyzer("en_stem");
        map.map("Name")
            .name("full_name")
            .store(Store::Yes)
            .index(Index::Untokenized)
            .boost(3.0);
        map.map("Name").name("name_sort").index(Index::NoNorms);
        map.embedded("Addresses").prefix("addr_").depth(2);
        map.bridge("summary").name("all").parameter("sep", " ");
        map.contained_in("Owner")
            .filter("recent", "RecentFilter", false);

        assert_eq!(map.index_name.as_deref(), Some("contacts"));
        assert_eq!(map.fields.len(), 2);
        assert_eq!(map.fields[0].declaration.store, Store::Yes);
        assert_eq!(map.fields[0].boost, Some(3.0));
        assert_eq!(map.fields[1].declaration.index, Index::NoNorms);
        assert_eq!(map.embedded[0].declaration.prefix, "addr_");
        assert_eq!(map.embedded[0].declaration.depth, Some(2));
        assert_eq!(map.class_bridges[0].declaration.bridge, "summary");
        assert_eq!(
            map.class_bridges[0].parameters,
            vec![("sep".to_string(), " ".to_string())]
        );
        assert_eq!(map.contained_in, vec!["Owner"]);
        assert!(!map.filters[0].cache);
    }

    #[test]
    fn test_embedded_defaults_to_member_prefix() {
        let mut map = DocumentMap::new("Contact");
        map.embedded("Addresses");
        assert_eq!(map.embedded[0].declaration.prefix, DEFAULT_PREFIX);
        assert_eq!(map.embedded[0].declaration.depth, None);
    }
}
