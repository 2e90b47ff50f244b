use crate::descriptor::{
    ClassBridgeDeclaration, EmbeddedDeclaration, FieldDeclaration, FilterDefinition,
    IdentifierDeclaration, IndexedDeclaration, MemberAnnotation, MemberDescriptor,
    ParameterDeclaration, Resolution, TypeAnnotation, TypeDescriptor,
};

use super::MetadataProvider;

/// Reads metadata from the annotations carried by the descriptors themselves.
///
/// When an annotation that may appear once is repeated, the first one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributedMetadata;

fn first_type<T>(ty: &TypeDescriptor, f: impl FnMut(&TypeAnnotation) -> Option<T>) -> Option<T> {
    ty.annotations.iter().find_map(f)
}

fn all_type<T>(ty: &TypeDescriptor, f: impl FnMut(&TypeAnnotation) -> Option<T>) -> Vec<T> {
    ty.annotations.iter().filter_map(f).collect()
}

fn first_member<T>(
    member: &MemberDescriptor,
    f: impl FnMut(&MemberAnnotation) -> Option<T>,
) -> Option<T> {
    member.annotations.iter().find_map(f)
}

impl MetadataProvider for AttributedMetadata {
    fn indexed(&self, ty: &TypeDescriptor) -> Option<IndexedDeclaration> {
        first_type(ty, |a| match a {
            TypeAnnotation::Indexed(decl) => Some(decl.clone()),
            _ => None,
        })
    }

    fn class_bridges(&self, ty: &TypeDescriptor) -> Vec<ClassBridgeDeclaration> {
        all_type(ty, |a| match a {
            TypeAnnotation::ClassBridge(decl) => Some(decl.clone()),
            _ => None,
        })
    }

    fn bridge_parameters(&self, ty: &TypeDescriptor) -> Vec<ParameterDeclaration> {
        all_type(ty, |a| match a {
            TypeAnnotation::Parameter(decl) => Some(decl.clone()),
            _ => None,
        })
    }

    fn type_field_bridge(&self, ty: &TypeDescriptor) -> Option<String> {
        first_type(ty, |a| match a {
            TypeAnnotation::FieldBridge { bridge } => Some(bridge.clone()),
            _ => None,
        })
    }

    fn type_analyzer(&self, ty: &TypeDescriptor) -> Option<String> {
        first_type(ty, |a| match a {
            TypeAnnotation::Analyzer { analyzer } => Some(analyzer.clone()),
            _ => None,
        })
    }

    fn type_boost(&self, ty: &TypeDescriptor) -> Option<f32> {
        first_type(ty, |a| match a {
            TypeAnnotation::Boost { value } => Some(*value),
            _ => None,
        })
    }

    fn filters(&self, ty: &TypeDescriptor) -> Vec<FilterDefinition> {
        all_type(ty, |a| match a {
            TypeAnnotation::FullTextFilter(def) => Some(def.clone()),
            _ => None,
        })
    }

    fn document_id(
        &self,
        _owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<IdentifierDeclaration> {
        first_member(member, |a| match a {
            MemberAnnotation::DocumentId(decl) => Some(decl.clone()),
            _ => None,
        })
    }

    fn fields(&self, _owner: &TypeDescriptor, member: &MemberDescriptor) -> Vec<FieldDeclaration> {
        member
            .annotations
            .iter()
            .filter_map(|a| match a {
                MemberAnnotation::Field(decl) => Some(decl.clone()),
                _ => None,
            })
            .collect()
    }

    fn field_bridge(&self, _owner: &TypeDescriptor, member: &MemberDescriptor) -> Option<String> {
        first_member(member, |a| match a {
            MemberAnnotation::FieldBridge { bridge } => Some(bridge.clone()),
            _ => None,
        })
    }

    fn date_bridge(
        &self,
        _owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<Resolution> {
        first_member(member, |a| match a {
            MemberAnnotation::DateBridge { resolution } => Some(*resolution),
            _ => None,
        })
    }

    fn embedded(
        &self,
        _owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<EmbeddedDeclaration> {
        first_member(member, |a| match a {
            MemberAnnotation::IndexedEmbedded(decl) => Some(decl.clone()),
            _ => None,
        })
    }

    fn contained_in(&self, _owner: &TypeDescriptor, member: &MemberDescriptor) -> bool {
        member
            .annotations
            .iter()
            .any(|a| matches!(a, MemberAnnotation::ContainedIn))
    }

    fn member_analyzer(
        &self,
        _owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<String> {
        first_member(member, |a| match a {
            MemberAnnotation::Analyzer { analyzer } => Some(analyzer.clone()),
            _ => None,
        })
    }

    fn member_boost(&self, _owner: &TypeDescriptor, member: &MemberDescriptor) -> Option<f32> {
        first_member(member, |a| match a {
            MemberAnnotation::Boost { value } => Some(*value),
            _ => None,
        })
    }

    fn is_mapped(&self, _owner: &TypeDescriptor, member: &MemberDescriptor) -> bool {
        member.annotations.iter().any(MemberAnnotation::is_mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ScalarKind, ValueType};

    #[test]
    fn test_reads_member_annotations() {
        let owner = TypeDescriptor::new("Book");
        let member = MemberDescriptor::property("Title", ValueType::Scalar(ScalarKind::String))
            .with(MemberAnnotation::Field(FieldDeclaration::default()))
            .with(MemberAnnotation::Field(FieldDeclaration {
                name: Some("title_exact".into()),
                ..Default::default()
            }))
            .with(MemberAnnotation::Boost { value: 2.0 });

        let meta = AttributedMetadata;
        assert_eq!(meta.fields(&owner, &member).len(), 2);
        assert_eq!(meta.member_boost(&owner, &member), Some(2.0));
        assert!(meta.document_id(&owner, &member).is_none());
        assert!(meta.is_mapped(&owner, &member));

        let plain = MemberDescriptor::property("Notes", ValueType::Scalar(ScalarKind::String))
            .with(MemberAnnotation::Boost { value: 1.5 });
        assert!(!meta.is_mapped(&owner, &plain));
    }

    #[test]
    fn test_reads_type_annotations_in_order() {
        let ty = TypeDescriptor::new("Book")
            .with(TypeAnnotation::Parameter(ParameterDeclaration {
                name: "a".into(),
                value: "1".into(),
                owner: None,
            }))
            .with(TypeAnnotation::Analyzer {
                analyzer: "en_stem".into(),
            })
            .with(TypeAnnotation::Parameter(ParameterDeclaration {
                name: "b".into(),
                value: "2".into(),
                owner: Some("cat".into()),
            }));

        let meta = AttributedMetadata;
        let params: Vec<String> = meta
            .bridge_parameters(&ty)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(params, vec!["a", "b"]);
        assert_eq!(meta.type_analyzer(&ty).as_deref(), Some("en_stem"));
        assert!(meta.indexed(&ty).is_none());
        assert!(meta.class_bridges(&ty).is_empty());
    }
}
