use docmap_core::descriptor::FilterDefinition;
use docmap_core::Getter;
use docmap_bridge::Analyzer;
use serde::Serialize;

use super::field::{ClassBridgeMapping, DocumentIdMapping, FieldMapping};

/// Indexable schema of one type, either a root document or an embedded one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMapping {
    pub mapped_type: String,
    /// Set on the root only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<Analyzer>,
    /// Set exactly once on the root; never on embedded mappings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentIdMapping>,
    pub fields: Vec<FieldMapping>,
    pub embedded: Vec<EmbeddedMapping>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class_bridges: Vec<ClassBridgeMapping>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contained_in: Vec<ContainedInMapping>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_definitions: Vec<FilterDefinition>,
}

/// A nested mapping whose fields are indexed under `prefix`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedMapping {
    pub mapping: DocumentMapping,
    pub getter: Getter,
    pub prefix: String,
    pub is_collection: bool,
}

/// Back-reference used to propagate reindexing to a containing entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainedInMapping {
    pub getter: Getter,
}

impl DocumentMapping {
    pub fn new(mapped_type: impl Into<String>) -> Self {
        Self {
            mapped_type: mapped_type.into(),
            index_name: None,
            boost: None,
            analyzer: None,
            document_id: None,
            fields: Vec::new(),
            embedded: Vec::new(),
            class_bridges: Vec::new(),
            contained_in: Vec::new(),
            filter_definitions: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn embedded_by_prefix(&self, prefix: &str) -> Option<&EmbeddedMapping> {
        self.embedded.iter().find(|e| e.prefix == prefix)
    }

    /// Every index field name this mapping produces, with embedded prefixes
    /// applied: document id, fields, named class bridges, then embedded
    /// mappings depth first. Duplicates are kept.
    pub fn field_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_field_names("", &mut names);
        names
    }

    fn collect_field_names(&self, prefix: &str, names: &mut Vec<String>) {
        if let Some(id) = &self.document_id {
            names.push(format!("{prefix}{}", id.name));
        }
        for field in &self.fields {
            names.push(format!("{prefix}{}", field.name));
        }
        for bridge in &self.class_bridges {
            if let Some(name) = &bridge.name {
                names.push(format!("{prefix}{name}"));
            }
        }
        for embedded in &self.embedded {
            let nested = format!("{prefix}{}", embedded.prefix);
            embedded.mapping.collect_field_names(&nested, names);
        }
    }

    /// Number of nested embedding levels below this mapping.
    pub fn depth(&self) -> usize {
        self.embedded
            .iter()
            .map(|e| 1 + e.mapping.depth())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmap_bridge::BridgeFactory;
    use docmap_core::descriptor::{Index, Store};
    use docmap_core::{resolve_accessor, MemberDescriptor, ScalarKind, TypeDescriptor, ValueType};

    fn field(owner: &str, name: &str) -> FieldMapping {
        let owner = TypeDescriptor::new(owner);
        let member = MemberDescriptor::property(name, ValueType::Scalar(ScalarKind::String));
        FieldMapping {
            name: name.to_string(),
            bridge: BridgeFactory::new().instantiate("string").unwrap(),
            getter: resolve_accessor(&owner, &member).unwrap(),
            store: Store::No,
            index: Index::Tokenized,
            boost: None,
            analyzer: None,
        }
    }

    #[test]
    fn test_field_names_apply_prefixes() {
        let mut country = DocumentMapping::new("Country");
        country.fields.push(field("Country", "Name"));

        let owner = TypeDescriptor::new("Address");
        let member = MemberDescriptor::property("Country", ValueType::object("Country"));
        let mut address = DocumentMapping::new("Address");
        address.fields.push(field("Address", "Line"));
        address.embedded.push(EmbeddedMapping {
            mapping: country,
            getter: resolve_accessor(&owner, &member).unwrap(),
            prefix: "Country.".into(),
            is_collection: false,
        });

        assert_eq!(address.field_names(), vec!["Line", "Country.Name"]);
        assert_eq!(address.depth(), 1);
        assert!(address.embedded_by_prefix("Country.").is_some());
        assert!(address.field("Line").is_some());
        assert!(address.field("Name").is_none());
    }
}
