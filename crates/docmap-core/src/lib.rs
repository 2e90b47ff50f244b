//! Core vocabulary for docmap: statically registered type descriptors, the
//! declarative annotations attached to them, the metadata query interface the
//! mapping compiler consumes, and the runtime values accessors read.

pub mod accessor;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod value;

pub use accessor::{resolve_accessor, AccessorKind, Getter};
pub use config::{DeclarationFile, Settings};
pub use descriptor::{MemberDescriptor, MemberKind, ScalarKind, TypeDescriptor, TypeRegistry, ValueType};
pub use error::CoreError;
pub use metadata::{AttributedMetadata, MetadataProvider};
pub use value::{Object, Value};
