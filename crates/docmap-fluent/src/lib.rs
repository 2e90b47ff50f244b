//! Fluent API for declaring document mappings in code instead of through
//! annotations on the type descriptors.
//!
//! # Example
//! ```no_run
//! use docmap_core::descriptor::{Index, Store};
//! use docmap_fluent::{DocumentMap, FluentSearchMapping};
//!
//! let mut contact = DocumentMap::new("Contact");
//! contact.name("contacts").id("Id").unwrap();
//! contact.map("Name").store(Store::Yes).boost(2.0);
//! contact.map("Email").index(Index::Untokenized);
//! contact.embedded("Addresses").depth(1);
//!
//! let mut mapping = FluentSearchMapping::new();
//! mapping.add(contact).unwrap();
//! // `mapping` is a MetadataProvider; hand it to the mapping compiler.
//! ```

mod error;
mod map;
mod mapping;

pub use error::FluentError;
pub use map::{ClassBridgePart, DocumentMap, EmbeddedPart, FieldPart, IdPart};
pub use mapping::FluentSearchMapping;
