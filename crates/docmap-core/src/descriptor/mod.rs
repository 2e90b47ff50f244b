pub mod annotation;
pub mod registry;
pub mod types;
pub mod value_type;

pub use annotation::{
    ClassBridgeDeclaration, EmbeddedDeclaration, FieldDeclaration, FilterDefinition,
    IdentifierDeclaration, Index, IndexedDeclaration, MemberAnnotation, ParameterDeclaration,
    Resolution, Store, TypeAnnotation, DEFAULT_PREFIX,
};
pub use registry::TypeRegistry;
pub use types::{MemberDescriptor, MemberKind, TypeDescriptor};
pub use value_type::{ScalarKind, ValueType};
