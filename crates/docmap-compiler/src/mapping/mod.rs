//! The compiled schema: what to index for a type and how to read it.

pub mod document;
pub mod field;

pub use document::{ContainedInMapping, DocumentMapping, EmbeddedMapping};
pub use field::{ClassBridgeMapping, DocumentIdMapping, FieldMapping};
