//! Value-to-text transformers ("bridges").

pub mod builtin;
pub mod date;

use std::fmt;
use std::sync::Arc;

use docmap_core::Value;
use serde::{Serialize, Serializer};

use crate::error::BridgeError;

pub use builtin::{BoolBridge, EnumBridge, NumericBridge, StringBridge, UriBridge, UuidBridge};
pub use date::DateBridge;

/// Converts a member value to indexable text.
pub trait FieldBridge: Send + Sync {
    /// `None` when the value contributes nothing (null or an unexpected variant).
    fn object_to_string(&self, value: &Value) -> Option<String>;

    /// The two-way view of this bridge, if it can also parse text back.
    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        None
    }
}

/// A bridge that also converts indexed text back into a value. Required for
/// document identifiers.
pub trait TwoWayFieldBridge: FieldBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError>;
}

/// Shared, named handle to a resolved bridge.
///
/// Two handles are equal when their names are equal; bridges are pure
/// functions of their configuration, which the name encodes.
#[derive(Clone)]
pub struct Bridge {
    name: String,
    inner: Arc<dyn FieldBridge>,
}

impl Bridge {
    pub fn new(name: impl Into<String>, bridge: impl FieldBridge + 'static) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(bridge),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn object_to_string(&self, value: &Value) -> Option<String> {
        if value.is_null() {
            return None;
        }
        self.inner.object_to_string(value)
    }

    pub fn is_two_way(&self) -> bool {
        self.inner.as_two_way().is_some()
    }

    pub fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        match self.inner.as_two_way() {
            Some(two_way) => two_way.string_to_object(text),
            None => Err(BridgeError::NotTwoWay(self.name.clone())),
        }
    }
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bridge").field(&self.name).finish()
    }
}

impl PartialEq for Bridge {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Serialize for Bridge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl FieldBridge for Upper {
        fn object_to_string(&self, value: &Value) -> Option<String> {
            match value {
                Value::String(s) => Some(s.to_uppercase()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_one_way_bridge() {
        let bridge = Bridge::new("upper", Upper);
        assert_eq!(bridge.object_to_string(&"abc".into()).as_deref(), Some("ABC"));
        assert!(bridge.object_to_string(&Value::Null).is_none());
        assert!(!bridge.is_two_way());
        assert!(matches!(
            bridge.string_to_object("ABC"),
            Err(BridgeError::NotTwoWay(name)) if name == "upper"
        ));
    }

    #[test]
    fn test_equality_by_name() {
        assert_eq!(Bridge::new("s", StringBridge), Bridge::new("s", StringBridge));
        assert_ne!(Bridge::new("s", StringBridge), Bridge::new("t", StringBridge));
        assert_eq!(format!("{:?}", Bridge::new("s", StringBridge)), "Bridge(\"s\")");
    }
}
