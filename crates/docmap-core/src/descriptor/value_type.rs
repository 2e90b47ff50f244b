use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Semantic kind of a scalar member value. Drives default bridge selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    String,
    Bool,
    I32,
    I64,
    F32,
    F64,
    Date,
    Enum,
    Uuid,
    Uri,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Date => "date",
            ScalarKind::Enum => "enum",
            ScalarKind::Uuid => "uuid",
            ScalarKind::Uri => "uri",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        let kind = match s {
            "string" => ScalarKind::String,
            "bool" => ScalarKind::Bool,
            "i32" => ScalarKind::I32,
            "i64" => ScalarKind::I64,
            "f32" => ScalarKind::F32,
            "f64" => ScalarKind::F64,
            "date" => ScalarKind::Date,
            "enum" => ScalarKind::Enum,
            "uuid" => ScalarKind::Uuid,
            "uri" => ScalarKind::Uri,
            _ => return None,
        };
        Some(kind)
    }
}

/// Declared type of a member.
///
/// Written in declaration files as a compact string: a scalar name
/// (`"string"`, `"date"`, ...), a type name (`"Address"`), or a generic
/// container (`"list<Address>"`, `"set<string>"`, `"map<string,Address>"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ValueType {
    Scalar(ScalarKind),
    Object(String),
    List(Box<ValueType>),
    Set(Box<ValueType>),
    Map(Box<ValueType>, Box<ValueType>),
}

impl ValueType {
    pub fn object(name: impl Into<String>) -> Self {
        ValueType::Object(name.into())
    }

    pub fn list(element: ValueType) -> Self {
        ValueType::List(Box::new(element))
    }

    pub fn set(element: ValueType) -> Self {
        ValueType::Set(Box::new(element))
    }

    pub fn map(key: ValueType, value: ValueType) -> Self {
        ValueType::Map(Box::new(key), Box::new(value))
    }

    /// Unwrap one level of generic container. Maps yield their value type.
    pub fn element_type(&self) -> &ValueType {
        match self {
            ValueType::List(element) | ValueType::Set(element) => element,
            ValueType::Map(_, value) => value,
            other => other,
        }
    }

    /// Whether values of this type enumerate zero or more elements.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            ValueType::List(_) | ValueType::Set(_) | ValueType::Map(_, _)
        )
    }

    pub fn object_name(&self) -> Option<&str> {
        match self {
            ValueType::Object(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Scalar(kind) => write!(f, "{}", kind.as_str()),
            ValueType::Object(name) => write!(f, "{name}"),
            ValueType::List(element) => write!(f, "list<{element}>"),
            ValueType::Set(element) => write!(f, "set<{element}>"),
            ValueType::Map(key, value) => write!(f, "map<{key},{value}>"),
        }
    }
}

impl FromStr for ValueType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CoreError::InvalidValueType("empty type".into()));
        }

        if let Some((head, args)) = split_generic(s)? {
            return match (head, args.as_slice()) {
                ("list", [element]) => Ok(ValueType::list(element.parse()?)),
                ("set", [element]) => Ok(ValueType::set(element.parse()?)),
                ("map", [key, value]) => Ok(ValueType::map(key.parse()?, value.parse()?)),
                _ => Err(CoreError::InvalidValueType(s.to_string())),
            };
        }

        if let Some(kind) = ScalarKind::parse(s) {
            return Ok(ValueType::Scalar(kind));
        }

        if s.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == ':') {
            Ok(ValueType::Object(s.to_string()))
        } else {
            Err(CoreError::InvalidValueType(s.to_string()))
        }
    }
}

/// Split `head<a,b>` into `("head", ["a", "b"])`, honoring nested brackets.
fn split_generic(s: &str) -> Result<Option<(&str, Vec<&str>)>, CoreError> {
    let Some(open) = s.find('<') else {
        return Ok(None);
    };
    if !s.ends_with('>') {
        return Err(CoreError::InvalidValueType(s.to_string()));
    }

    let head = s[..open].trim();
    let inner = &s[open + 1..s.len() - 1];
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| CoreError::InvalidValueType(s.to_string()))?;
            }
            ',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(CoreError::InvalidValueType(s.to_string()));
    }
    args.push(inner[start..].trim());

    Ok(Some((head, args)))
}

impl TryFrom<String> for ValueType {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ValueType> for String {
    fn from(ty: ValueType) -> Self {
        ty.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars_and_objects() {
        assert_eq!(
            "date".parse::<ValueType>().unwrap(),
            ValueType::Scalar(ScalarKind::Date)
        );
        assert_eq!(
            "Country".parse::<ValueType>().unwrap(),
            ValueType::object("Country")
        );
    }

    #[test]
    fn test_parse_nested_generics() {
        let ty: ValueType = "map<string, list<Address>>".parse().unwrap();
        assert_eq!(
            ty,
            ValueType::map(
                ValueType::Scalar(ScalarKind::String),
                ValueType::list(ValueType::object("Address"))
            )
        );
        assert_eq!(ty.to_string(), "map<string,list<Address>>");
    }

    #[test]
    fn test_element_type_unwraps_one_level() {
        let list: ValueType = "list<Address>".parse().unwrap();
        assert_eq!(list.element_type(), &ValueType::object("Address"));
        assert!(list.is_collection());

        let map: ValueType = "map<i32,Country>".parse().unwrap();
        assert_eq!(map.element_type(), &ValueType::object("Country"));

        let plain = ValueType::object("Country");
        assert_eq!(plain.element_type(), &plain);
        assert!(!plain.is_collection());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("list<Address".parse::<ValueType>().is_err());
        assert!("list<a,b>".parse::<ValueType>().is_err());
        assert!("".parse::<ValueType>().is_err());
        assert!("not a type".parse::<ValueType>().is_err());
    }
}
