//! The query interface the mapping compiler uses to read declarative
//! metadata, independent of where that metadata was declared.

pub mod attributed;

pub use attributed::AttributedMetadata;

use crate::descriptor::{
    ClassBridgeDeclaration, EmbeddedDeclaration, FieldDeclaration, FilterDefinition,
    IdentifierDeclaration, IndexedDeclaration, MemberDescriptor, ParameterDeclaration, Resolution,
    TypeDescriptor,
};

/// Declarative metadata source.
///
/// Member queries receive the declaring type alongside the member, since a
/// member name is only unique within its owner.
pub trait MetadataProvider {
    fn indexed(&self, ty: &TypeDescriptor) -> Option<IndexedDeclaration>;

    fn class_bridges(&self, ty: &TypeDescriptor) -> Vec<ClassBridgeDeclaration>;

    fn bridge_parameters(&self, ty: &TypeDescriptor) -> Vec<ParameterDeclaration>;

    /// Field bridge declared at type level. Its presence claims every
    /// unnamed bridge parameter of the type.
    fn type_field_bridge(&self, ty: &TypeDescriptor) -> Option<String>;

    fn type_analyzer(&self, ty: &TypeDescriptor) -> Option<String>;

    fn type_boost(&self, ty: &TypeDescriptor) -> Option<f32>;

    fn filters(&self, ty: &TypeDescriptor) -> Vec<FilterDefinition>;

    fn document_id(
        &self,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<IdentifierDeclaration>;

    fn fields(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> Vec<FieldDeclaration>;

    fn field_bridge(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> Option<String>;

    fn date_bridge(&self, owner: &TypeDescriptor, member: &MemberDescriptor)
        -> Option<Resolution>;

    fn embedded(
        &self,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Option<EmbeddedDeclaration>;

    fn contained_in(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> bool;

    fn member_analyzer(&self, owner: &TypeDescriptor, member: &MemberDescriptor)
        -> Option<String>;

    fn member_boost(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> Option<f32>;

    /// Whether the member contributes anything to the mapping.
    fn is_mapped(&self, owner: &TypeDescriptor, member: &MemberDescriptor) -> bool {
        self.document_id(owner, member).is_some()
            || !self.fields(owner, member).is_empty()
            || self.embedded(owner, member).is_some()
            || self.contained_in(owner, member)
    }
}
