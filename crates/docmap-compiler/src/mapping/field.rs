use std::collections::BTreeMap;

use docmap_bridge::{Analyzer, Bridge};
use docmap_core::descriptor::{Index, Store};
use docmap_core::Getter;
use serde::Serialize;

/// The document key. Always stored and indexed untokenized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentIdMapping {
    pub name: String,
    /// Member the id is read from.
    pub member: String,
    /// Guaranteed two-way.
    pub bridge: Bridge,
    pub getter: Getter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
}

impl DocumentIdMapping {
    pub fn store(&self) -> Store {
        Store::Yes
    }

    pub fn index(&self) -> Index {
        Index::Untokenized
    }
}

/// One indexed field produced from a member value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMapping {
    pub name: String,
    pub bridge: Bridge,
    pub getter: Getter,
    pub store: Store,
    pub index: Index,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<Analyzer>,
}

/// A bridge applied to the whole instance rather than one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBridgeMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub bridge: Bridge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    pub index: Index,
    pub store: Store,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<Analyzer>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}
