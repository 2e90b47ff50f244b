use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use docmap_core::descriptor::Resolution;
use docmap_core::{ScalarKind, ValueType};
use tantivy::tokenizer::TextAnalyzer;

use crate::analyzer::{Analyzer, AnalyzerRegistry};
use crate::bridge::{
    BoolBridge, Bridge, DateBridge, EnumBridge, NumericBridge, StringBridge, UriBridge, UuidBridge,
};
use crate::error::BridgeError;

/// Builds a bridge on demand.
pub type BridgeConstructor = Arc<dyn Fn() -> Result<Bridge, BridgeError> + Send + Sync>;

/// Resolves bridges and analyzers from declared names, and guesses a default
/// bridge from a member's value type when none is declared.
#[derive(Clone)]
pub struct BridgeFactory {
    bridges: HashMap<String, BridgeConstructor>,
    analyzers: AnalyzerRegistry,
}

impl BridgeFactory {
    /// A factory with the built-in bridges registered under their scalar
    /// names (`"string"`, `"i64"`, `"date"`, ...) and Tantivy's analyzers.
    pub fn new() -> Self {
        let mut factory = Self {
            bridges: HashMap::new(),
            analyzers: AnalyzerRegistry::new(),
        };
        for kind in [
            ScalarKind::String,
            ScalarKind::Bool,
            ScalarKind::I32,
            ScalarKind::I64,
            ScalarKind::F32,
            ScalarKind::F64,
            ScalarKind::Date,
            ScalarKind::Enum,
            ScalarKind::Uuid,
            ScalarKind::Uri,
        ] {
            factory.register_bridge(kind.as_str(), move || Ok(builtin(kind, None)));
        }
        factory
    }

    /// Register (or replace) a named bridge constructor.
    pub fn register_bridge<F>(&mut self, name: &str, constructor: F) -> &mut Self
    where
        F: Fn() -> Result<Bridge, BridgeError> + Send + Sync + 'static,
    {
        if self
            .bridges
            .insert(name.to_string(), Arc::new(constructor))
            .is_some()
        {
            tracing::debug!("Replaced bridge {name}");
        }
        self
    }

    /// Register (or replace) a named analyzer.
    pub fn register_analyzer(&mut self, name: &str, analyzer: TextAnalyzer) -> &mut Self {
        self.analyzers.register(name, analyzer);
        self
    }

    pub fn contains_bridge(&self, name: &str) -> bool {
        self.bridges.contains_key(name)
    }

    /// Construct the bridge registered under `name`.
    pub fn instantiate(&self, name: &str) -> Result<Bridge, BridgeError> {
        let constructor = self
            .bridges
            .get(name)
            .ok_or_else(|| BridgeError::UnknownBridge(name.to_string()))?;
        constructor().map_err(|e| match e {
            BridgeError::Instantiation { .. } => e,
            other => BridgeError::Instantiation {
                name: name.to_string(),
                reason: other.to_string(),
            },
        })
    }

    /// Pick the bridge for a member: the explicit one when declared, else a
    /// default for the value type. `date` applies only to date members.
    pub fn guess(
        &self,
        member: &str,
        value_type: &ValueType,
        explicit: Option<&str>,
        date: Option<Resolution>,
    ) -> Result<Bridge, BridgeError> {
        if let Some(name) = explicit {
            return self.instantiate(name);
        }

        tracing::trace!("Guessing bridge for {member} ({value_type})");
        match value_type {
            ValueType::Scalar(kind) => Ok(builtin(*kind, date)),
            other => Err(BridgeError::Unguessable {
                member: member.to_string(),
                value_type: other.to_string(),
            }),
        }
    }

    pub fn analyzer(&self, name: &str) -> Result<Analyzer, BridgeError> {
        self.analyzers.get(name)
    }
}

fn builtin(kind: ScalarKind, date: Option<Resolution>) -> Bridge {
    match kind {
        ScalarKind::String => Bridge::new("string", StringBridge),
        ScalarKind::Bool => Bridge::new("bool", BoolBridge),
        ScalarKind::Enum => Bridge::new("enum", EnumBridge),
        ScalarKind::Uuid => Bridge::new("uuid", UuidBridge),
        ScalarKind::Uri => Bridge::new("uri", UriBridge),
        ScalarKind::Date => match date {
            None => Bridge::new("date", DateBridge::default()),
            Some(resolution) => Bridge::new(
                format!("date:{resolution:?}").to_lowercase(),
                DateBridge::new(resolution),
            ),
        },
        ScalarKind::I32 => Bridge::new("i32", NumericBridge { kind }),
        ScalarKind::I64 => Bridge::new("i64", NumericBridge { kind }),
        ScalarKind::F32 => Bridge::new("f32", NumericBridge { kind }),
        ScalarKind::F64 => Bridge::new("f64", NumericBridge { kind }),
    }
}

impl Default for BridgeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BridgeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.bridges.keys().collect();
        names.sort();
        f.debug_struct("BridgeFactory")
            .field("bridges", &names)
            .field("analyzers", &self.analyzers)
            .finish()
    }
}
