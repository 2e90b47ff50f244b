use docmap_core::{ScalarKind, Value};
use url::Url;
use uuid::Uuid;

use super::{FieldBridge, TwoWayFieldBridge};
use crate::error::BridgeError;

fn parse_error(bridge: &str, text: &str, reason: impl ToString) -> BridgeError {
    BridgeError::Parse {
        bridge: bridge.to_string(),
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringBridge;

impl FieldBridge for StringBridge {
    fn object_to_string(&self, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        Some(self)
    }
}

impl TwoWayFieldBridge for StringBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        Ok(Value::String(text.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolBridge;

impl FieldBridge for BoolBridge {
    fn object_to_string(&self, value: &Value) -> Option<String> {
        match value {
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        Some(self)
    }
}

impl TwoWayFieldBridge for BoolBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        text.parse::<bool>()
            .map(Value::Bool)
            .map_err(|e| parse_error("bool", text, e))
    }
}

/// Integers and floating point numbers of one declared width.
#[derive(Debug, Clone, Copy)]
pub struct NumericBridge {
    pub(crate) kind: ScalarKind,
}

impl NumericBridge {
    /// `None` for non-numeric kinds.
    pub fn new(kind: ScalarKind) -> Option<Self> {
        match kind {
            ScalarKind::I32 | ScalarKind::I64 | ScalarKind::F32 | ScalarKind::F64 => {
                Some(Self { kind })
            }
            _ => None,
        }
    }
}

impl FieldBridge for NumericBridge {
    fn object_to_string(&self, value: &Value) -> Option<String> {
        match value {
            Value::I32(n) => Some(n.to_string()),
            Value::I64(n) => Some(n.to_string()),
            Value::F32(n) => Some(n.to_string()),
            Value::F64(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        Some(self)
    }
}

impl TwoWayFieldBridge for NumericBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        let name = self.kind.as_str();
        match self.kind {
            ScalarKind::I32 => text.parse().map(Value::I32).map_err(|e| parse_error(name, text, e)),
            ScalarKind::I64 => text.parse().map(Value::I64).map_err(|e| parse_error(name, text, e)),
            ScalarKind::F32 => text.parse().map(Value::F32).map_err(|e| parse_error(name, text, e)),
            _ => text.parse().map(Value::F64).map_err(|e| parse_error(name, text, e)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnumBridge;

impl FieldBridge for EnumBridge {
    fn object_to_string(&self, value: &Value) -> Option<String> {
        match value {
            Value::Enum(variant) => Some(variant.clone()),
            _ => None,
        }
    }

    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        Some(self)
    }
}

impl TwoWayFieldBridge for EnumBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        Ok(Value::Enum(text.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidBridge;

impl FieldBridge for UuidBridge {
    fn object_to_string(&self, value: &Value) -> Option<String> {
        match value {
            Value::Uuid(id) => Some(id.hyphenated().to_string()),
            _ => None,
        }
    }

    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        Some(self)
    }
}

impl TwoWayFieldBridge for UuidBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        Uuid::parse_str(text)
            .map(Value::Uuid)
            .map_err(|e| parse_error("uuid", text, e))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UriBridge;

impl FieldBridge for UriBridge {
    fn object_to_string(&self, value: &Value) -> Option<String> {
        match value {
            Value::Uri(uri) => Some(uri.as_str().to_string()),
            _ => None,
        }
    }

    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        Some(self)
    }
}

impl TwoWayFieldBridge for UriBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        Url::parse(text)
            .map(Value::Uri)
            .map_err(|e| parse_error("uri", text, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_bridge_parses_declared_width() {
        let bridge = NumericBridge::new(ScalarKind::I64).unwrap();
        assert_eq!(bridge.object_to_string(&Value::I64(42)).as_deref(), Some("42"));
        assert_eq!(bridge.string_to_object("42").unwrap(), Value::I64(42));
        assert!(bridge.string_to_object("forty-two").is_err());
        assert!(NumericBridge::new(ScalarKind::String).is_none());
    }

    #[test]
    fn test_mismatched_variant_yields_nothing() {
        assert!(StringBridge.object_to_string(&Value::I32(1)).is_none());
        assert!(BoolBridge.object_to_string(&"true".into()).is_none());
    }

    #[test]
    fn test_uuid_bridge() {
        let id = Uuid::new_v4();
        let text = UuidBridge.object_to_string(&Value::Uuid(id)).unwrap();
        assert_eq!(UuidBridge.string_to_object(&text).unwrap(), Value::Uuid(id));
        assert!(UuidBridge.string_to_object("not-a-uuid").is_err());
    }

    #[test]
    fn test_uri_bridge() {
        let text = "https://example.com/docs?page=2";
        let value = UriBridge.string_to_object(text).unwrap();
        assert_eq!(UriBridge.object_to_string(&value).as_deref(), Some(text));
    }

    #[test]
    fn test_uri_rejects_malformed_text() {
        for text in ["example.com", "not a uri: really", ":", "hello world:42", "http://exa mple.com/"] {
            match UriBridge.string_to_object(text) {
                Err(BridgeError::Parse { bridge, .. }) => assert_eq!(bridge, "uri"),
                other => panic!("{text:?} should not parse, got {other:?}"),
            }
        }
    }
}
