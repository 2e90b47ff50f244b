//! Text analyzers, resolved by name through a Tantivy tokenizer manager.
//!
//! The built-in names are Tantivy's own: `default` (simple tokenizer,
//! long-token filter, lowercasing), `raw`, `whitespace` and `en_stem`.

use std::fmt;

use serde::{Serialize, Serializer};
use tantivy::tokenizer::{TextAnalyzer, TokenStream, TokenizerManager};

use crate::error::BridgeError;

/// A named text analyzer.
#[derive(Clone)]
pub struct Analyzer {
    name: String,
    inner: TextAnalyzer,
}

impl Analyzer {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the analyzer over `text` and collect the produced terms.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let mut analyzer = self.inner.clone();
        let mut stream = analyzer.token_stream(text);
        let mut tokens = Vec::new();
        while stream.advance() {
            tokens.push(stream.token().text.clone());
        }
        tokens
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Analyzer").field(&self.name).finish()
    }
}

impl PartialEq for Analyzer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Serialize for Analyzer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Name-to-analyzer lookup table.
#[derive(Clone, Default)]
pub struct AnalyzerRegistry {
    tokenizers: TokenizerManager,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an analyzer under `name`.
    pub fn register(&self, name: &str, analyzer: TextAnalyzer) {
        self.tokenizers.register(name, analyzer);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokenizers.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Result<Analyzer, BridgeError> {
        self.tokenizers
            .get(name)
            .map(|inner| Analyzer {
                name: name.to_string(),
                inner,
            })
            .ok_or_else(|| BridgeError::UnknownAnalyzer(name.to_string()))
    }
}

impl fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tantivy::tokenizer::{LowerCaser, WhitespaceTokenizer};

    #[test]
    fn test_builtin_default_lowercases_and_splits() {
        let registry = AnalyzerRegistry::new();
        let analyzer = registry.get("default").unwrap();
        assert_eq!(analyzer.tokens("Hello World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_raw_keeps_text_whole() {
        let registry = AnalyzerRegistry::new();
        let analyzer = registry.get("raw").unwrap();
        assert_eq!(analyzer.tokens("New York"), vec!["New York"]);
    }

    #[test]
    fn test_custom_registration() {
        let registry = AnalyzerRegistry::new();
        assert!(!registry.contains("lower_ws"));
        registry.register(
            "lower_ws",
            TextAnalyzer::builder(WhitespaceTokenizer::default())
                .filter(LowerCaser)
                .build(),
        );
        let analyzer = registry.get("lower_ws").unwrap();
        assert_eq!(analyzer.tokens("Foo-Bar Baz"), vec!["foo-bar", "baz"]);
        assert_eq!(analyzer.name(), "lower_ws");
    }

    #[test]
    fn test_unknown_analyzer() {
        let registry = AnalyzerRegistry::new();
        assert!(matches!(
            registry.get("klingon"),
            Err(BridgeError::UnknownAnalyzer(name)) if name == "klingon"
        ));
    }
}
