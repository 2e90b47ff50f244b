//! Declarative indexing metadata attached to types and members.
//!
//! These are the attribute-style declarations a type author writes. The
//! compiler never reads them directly; it goes through a
//! [`MetadataProvider`](crate::metadata::MetadataProvider).

use serde::{Deserialize, Serialize};

/// Whether the raw value is stored in the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Store {
    #[default]
    No,
    Yes,
    Compress,
}

/// How a field's text is indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Index {
    No,
    #[default]
    Tokenized,
    Untokenized,
    NoNorms,
}

/// Truncation applied by the date bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    #[default]
    Millisecond,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifierDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub store: Store,
    #[serde(default)]
    pub index: Index,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
}

/// Sentinel prefix meaning "the member name followed by a dot".
pub const DEFAULT_PREFIX: &str = ".";

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedDeclaration {
    /// Maximum embedding depth. `None` or `0` means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_element: Option<String>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for EmbeddedDeclaration {
    fn default() -> Self {
        Self {
            depth: None,
            target_element: None,
            prefix: default_prefix(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassBridgeDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub bridge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(default)]
    pub index: Index,
    #[serde(default)]
    pub store: Store,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
}

/// A bridge parameter. `owner` names the class bridge it configures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefinition {
    pub name: String,
    pub implementation: String,
    #[serde(default = "default_cache")]
    pub cache: bool,
}

fn default_cache() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeAnnotation {
    Indexed(IndexedDeclaration),
    Analyzer { analyzer: String },
    Boost { value: f32 },
    ClassBridge(ClassBridgeDeclaration),
    Parameter(ParameterDeclaration),
    FieldBridge { bridge: String },
    FullTextFilter(FilterDefinition),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberAnnotation {
    DocumentId(IdentifierDeclaration),
    Field(FieldDeclaration),
    IndexedEmbedded(EmbeddedDeclaration),
    ContainedIn,
    Analyzer { analyzer: String },
    Boost { value: f32 },
    FieldBridge { bridge: String },
    DateBridge { resolution: Resolution },
}

impl MemberAnnotation {
    /// Whether this annotation makes the member contribute to the mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(
            self,
            MemberAnnotation::DocumentId(_)
                | MemberAnnotation::Field(_)
                | MemberAnnotation::IndexedEmbedded(_)
                | MemberAnnotation::ContainedIn
        )
    }
}
