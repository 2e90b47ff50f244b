//! Compiles declarative indexing metadata over a graph of described types
//! into a [`DocumentMapping`] tree.
//!
//! ```no_run
//! use docmap_bridge::BridgeFactory;
//! use docmap_compiler::MappingCompiler;
//! use docmap_core::{AttributedMetadata, DeclarationFile};
//!
//! let file = DeclarationFile::load("types.json".as_ref()).unwrap();
//! let registry = file.registry();
//! let bridges = BridgeFactory::new();
//! let compiled = MappingCompiler::new(&registry, &AttributedMetadata, &bridges)
//!     .with_settings(file.settings.clone())
//!     .build("Contact")
//!     .unwrap();
//! println!("{:?}", compiled.mapping.field_names());
//! ```

pub mod compiler;
pub mod error;
pub mod mapping;

pub use compiler::{Compiled, Diagnostic, Diagnostics, MappingCompiler, Severity};
pub use error::CompileError;
pub use mapping::{
    ClassBridgeMapping, ContainedInMapping, DocumentIdMapping, DocumentMapping, EmbeddedMapping,
    FieldMapping,
};
