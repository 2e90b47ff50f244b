use std::collections::HashMap;

use docmap_core::descriptor::{
    ClassBridgeDeclaration, EmbeddedDeclaration, FieldDeclaration, FilterDefinition,
    IdentifierDeclaration, IndexedDeclaration, MemberDescriptor, ParameterDeclaration, Resolution,
    TypeDescriptor,
};
use docmap_core::MetadataProvider;

use crate::error::FluentError;
use crate::map::DocumentMap;

/// A set of [`DocumentMap`]s answering the compiler's metadata queries.
///
/// Every added type counts as indexed. Types without a map have no metadata.
#[derive(Debug, Clone, Default)]
pub struct FluentSearchMapping {
    maps: HashMap<String, DocumentMap>,
}

impl FluentSearchMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, map: DocumentMap) -> Result<&mut Self, FluentError> {
        if self.maps.contains_key(&map.type_name) {
            return Err(FluentError::DuplicateMap(map.type_name));
        }
        tracing::debug!(
            "Adding fluent map for {} ({} field(s), {} embedded)",
            map.type_name,
            map.fields.len(),
            map.embedded.len()
        );
        self.maps.insert(map.type_name.clone(), map);
        Ok(self)
    }

    pub fn get(&self, type_name: &str) -> Option<&DocumentMap> {
        self.maps.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    fn map(&self, ty: &TypeDescriptor) -> Option<&DocumentMap> {
        self.maps.get(&ty.name)
    }
}

impl MetadataProvider for FluentSearchMapping {
    fn indexed(&self, ty: &TypeDescriptor) -> Option<IndexedDeclaration> {
        self.map(ty).map(|map| IndexedDeclaration {
            index: map.index_name.clone(),
        })
    }

    fn class_bridges(&self, ty: &TypeDescriptor) -> Vec<ClassBridgeDeclaration> {
        self.map(ty)
            .map(|map| {
                map.class_bridges
                    .iter()
                    .map(|part| part.declaration.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // Parameters belong to a bridge part already, so each one names its
    // bridge as owner. An unnamed bridge yields unnamed parameters.
    fn bridge_parameters(&self, ty: &TypeDescriptor) -> Vec<ParameterDeclaration> {
        let Some(map) = self.map(ty) else {
            return Vec::new();
        };
        map.class_bridges
            .iter()
            .flat_map(|part| {
                part.parameters.iter().map(|(name, value)| ParameterDeclaration {
                    name: name.clone(),
                    value: value.clone(),
                    owner: part.declaration.name.clone(),
                })
            })
            .collect()
    }

    fn type_field_bridge(&self, _ty: &TypeDescriptor) -> Option<String> {
        None
    }

    fn type_analyzer(&self, ty: &TypeDescriptor) -> Option<String> {
        self.map(ty).and_then(|map| map.analyzer.clone())
    }

    fn type_boost(&self, ty: &TypeDescriptor) -> Option<f32> {
        self.map(ty).and_then(|map| map.boost)
    }

    fn filters(&self, ty: &TypeDescriptor) -> Vec<FilterDefinition> {
        self.map(ty)
            .map(|map| map.filters.clone())
            .unwrap_or_default()
    }

    fn document_id(
        &self,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<IdentifierDeclaration> {
        self.map(owner)?
            .id
            .as_ref()
            .filter(|id| id.member == member.name)
            .map(|id| IdentifierDeclaration {
                name: id.name.clone(),
            })
    }

    fn fields(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> Vec<FieldDeclaration> {
        let Some(map) = self.map(owner) else {
            return Vec::new();
        };
        map.fields
            .iter()
            .filter(|part| part.member == member.name)
            .map(|part| part.declaration.clone())
            .collect()
    }

    fn field_bridge(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> Option<String> {
        let map = self.map(owner)?;
        let id = map
            .id
            .as_ref()
            .filter(|id| id.member == member.name)
            .and_then(|id| id.bridge.clone());
        id.or_else(|| {
            map.fields
                .iter()
                .filter(|part| part.member == member.name)
                .find_map(|part| part.bridge.clone())
        })
    }

    fn date_bridge(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> Option<Resolution> {
        self.map(owner)?
            .fields
            .iter()
            .filter(|part| part.member == member.name)
            .find_map(|part| part.resolution)
    }

    fn embedded(
        &self,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<EmbeddedDeclaration> {
        self.map(owner)?
            .embedded
            .iter()
            .find(|part| part.member == member.name)
            .map(|part| part.declaration.clone())
    }

    fn contained_in(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> bool {
        self.map(owner)
            .is_some_and(|map| map.contained_in.iter().any(|m| *m == member.name))
    }

    // Analyzers are declared per field part.
    fn member_analyzer(&self, _owner: &TypeDescriptor, _member: &MemberDescriptor) -> Option<String> {
        None
    }

    fn member_boost(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> Option<f32> {
        let map = self.map(owner)?;
        let id = map
            .id
            .as_ref()
            .filter(|id| id.member == member.name)
            .and_then(|id| id.boost);
        id.or_else(|| {
            map.fields
                .iter()
                .filter(|part| part.member == member.name)
                .find_map(|part| part.boost)
        })
        .or_else(|| {
            map.embedded
                .iter()
                .filter(|part| part.member == member.name)
                .find_map(|part| part.boost)
        })
    }
}

#[cfg(test)]
mod tests {
    use docmap_bridge::BridgeFactory;
    use docmap_compiler::{CompileError, MappingCompiler};
    use docmap_core::descriptor::{Index, Store};
    use docmap_core::{ScalarKind, TypeRegistry, ValueType};

    use super::*;

    fn registry() -> TypeRegistry {
        let string = || ValueType::Scalar(ScalarKind::String);
        [
            TypeDescriptor::new("Contact")
                .member(MemberDescriptor::property("Id", ValueType::Scalar(ScalarKind::I64)))
                .member(MemberDescriptor::property("Name", string()))
                .member(MemberDescriptor::property("Notes", string()))
                .member(MemberDescriptor::property(
                    "Addresses",
                    ValueType::list(ValueType::object("Address")),
                ))
                .member(MemberDescriptor::property("Owner", ValueType::object("User"))),
            TypeDescriptor::new("Address")
                .member(MemberDescriptor::property("Id", ValueType::Scalar(ScalarKind::I64)))
                .member(MemberDescriptor::property("City", string())),
        ]
        .into_iter()
        .collect()
    }

    fn contact_map() -> DocumentMap {
        let mut contact = DocumentMap::new("Contact");
        contact.name("contacts").boost(1.5);
        contact.id("Id").unwrap().name("contact_id");
        contact.map("Name").store(Store::Yes).boost(2.0);
        contact.map("Name").name("name_exact").index(Index::Untokenized);
        contact.embedded("Addresses").prefix("addr_");
        contact.contained_in("Owner");
        contact
    }

    fn address_map() -> DocumentMap {
        let mut address = DocumentMap::new("Address");
        address.id("Id").unwrap();
        address.map("City");
        address
    }

    #[test]
    fn test_answers_member_queries() {
        let mut mapping = FluentSearchMapping::new();
        mapping.add(contact_map()).unwrap();

        let registry = registry();
        let contact = registry.get("Contact").unwrap();
        let name = contact.find_member("Name").unwrap();
        let notes = contact.find_member("Notes").unwrap();
        let owner = contact.find_member("Owner").unwrap();

        assert_eq!(mapping.fields(contact, name).len(), 2);
        assert_eq!(mapping.member_boost(contact, name), Some(2.0));
        assert!(mapping.is_mapped(contact, owner));
        assert!(!mapping.is_mapped(contact, notes));
        assert_eq!(
            mapping.indexed(contact).and_then(|i| i.index).as_deref(),
            Some("contacts")
        );
        assert!(mapping.indexed(registry.get("Address").unwrap()).is_none());
    }

    #[test]
    fn test_duplicate_map_rejected() {
        let mut mapping = FluentSearchMapping::new();
        mapping.add(address_map()).unwrap();
        let err = mapping.add(address_map()).unwrap_err();
        assert!(matches!(err, FluentError::DuplicateMap(ref name) if name == "Address"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_compiles_through_mapping_compiler() {
        let mut mapping = FluentSearchMapping::new();
        mapping.add(contact_map()).unwrap().add(address_map()).unwrap();

        let registry = registry();
        let bridges = BridgeFactory::new();
        let compiled = MappingCompiler::new(&registry, &mapping, &bridges)
            .build("Contact")
            .unwrap();
        let document = &compiled.mapping;

        assert_eq!(document.index_name.as_deref(), Some("contacts"));
        assert_eq!(document.boost, Some(1.5));
        assert_eq!(document.document_id.as_ref().unwrap().name, "contact_id");
        assert_eq!(document.contained_in.len(), 1);
        assert_eq!(
            document.field_names(),
            vec!["contact_id", "Name", "name_exact", "addr_Id", "addr_City"]
        );
        assert_eq!(document.field("name_exact").unwrap().index, Index::Untokenized);
        assert!(document.embedded[0].is_collection);
    }

    #[test]
    fn test_class_bridge_parameters_reach_their_bridge() {
        let mut contact = DocumentMap::new("Contact");
        contact.id("Id").unwrap();
        contact.bridge("string").name("summary").parameter("sep", ",");
        contact.bridge("string").name("other");
        let mut mapping = FluentSearchMapping::new();
        mapping.add(contact).unwrap();

        let registry = registry();
        let bridges = BridgeFactory::new();
        let compiled = MappingCompiler::new(&registry, &mapping, &bridges)
            .build("Contact")
            .unwrap();

        let class_bridges = &compiled.mapping.class_bridges;
        assert_eq!(class_bridges[0].parameters["sep"], ",");
        assert!(class_bridges[1].parameters.is_empty());
        assert!(compiled.diagnostics.is_empty());
    }

    #[test]
    fn test_bridge_parameters_keep_declaration_order() {
        let mut contact = DocumentMap::new("Contact");
        contact
            .bridge("string")
            .name("summary")
            .parameter("zone", "utc")
            .parameter("align", "left");
        let mut mapping = FluentSearchMapping::new();
        mapping.add(contact).unwrap();

        let registry = registry();
        let parameters = mapping.bridge_parameters(registry.get("Contact").unwrap());
        let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zone", "align"]);
        assert!(parameters.iter().all(|p| p.owner.as_deref() == Some("summary")));
    }

    #[test]
    fn test_unmapped_root_has_no_id() {
        let mapping = FluentSearchMapping::new();
        let registry = registry();
        let bridges = BridgeFactory::new();
        let err = MappingCompiler::new(&registry, &mapping, &bridges)
            .build("Contact")
            .unwrap_err();
        assert!(matches!(err, CompileError::MissingIdentifier(_)));
    }
}
