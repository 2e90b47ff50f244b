use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::{TypeDescriptor, TypeRegistry};
use crate::error::CoreError;

/// Compiler settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fail when the root type declares no document identifier.
    pub require_document_id: bool,
    /// Global embedding depth ceiling. `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            require_document_id: true,
            max_depth: None,
        }
    }
}

/// A JSON file declaring types and their indexing annotations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationFile {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl DeclarationFile {
    /// Read and parse a declaration file from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        let file = Self::from_json(&text)?;
        tracing::debug!(
            "Loaded {} type(s) from {}",
            file.types.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let file: DeclarationFile = serde_json::from_str(text)?;
        if let Some(0) = file.settings.max_depth {
            return Err(CoreError::Config(
                "settings.max_depth must be at least 1 (omit it for unlimited)".into(),
            ));
        }
        Ok(file)
    }

    /// Build a registry from the declared types. Later duplicates win.
    pub fn registry(&self) -> TypeRegistry {
        self.types.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.require_document_id);
        assert!(settings.max_depth.is_none());

        let parsed: Settings = serde_json::from_str(r#"{"max_depth": 3}"#).unwrap();
        assert!(parsed.require_document_id);
        assert_eq!(parsed.max_depth, Some(3));
    }

    #[test]
    fn test_load_declaration_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types.json");
        std::fs::write(
            &path,
            r#"{
                "settings": {"require_document_id": false},
                "types": [
                    {"name": "Country", "members": [{"name": "Name", "type": "string"}]}
                ]
            }"#,
        )
        .unwrap();

        let file = DeclarationFile::load(&path).unwrap();
        assert!(!file.settings.require_document_id);
        let registry = file.registry();
        assert!(registry.contains("Country"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_zero_max_depth_rejected() {
        let err = DeclarationFile::from_json(r#"{"settings": {"max_depth": 0}}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DeclarationFile::load(Path::new("/nonexistent/types.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
