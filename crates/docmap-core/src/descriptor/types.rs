use serde::{Deserialize, Serialize};

use super::annotation::{MemberAnnotation, TypeAnnotation};
use super::value_type::ValueType;

/// How a member is read from an instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    #[default]
    Property,
    Field,
    Method,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Property => "property",
            MemberKind::Field => "field",
            MemberKind::Method => "method",
        }
    }
}

/// A member declared directly on a type (never inherited).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<MemberAnnotation>,
}

impl MemberDescriptor {
    pub fn property(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, MemberKind::Property, value_type)
    }

    pub fn field(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, MemberKind::Field, value_type)
    }

    pub fn method(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, MemberKind::Method, value_type)
    }

    fn new(name: impl Into<String>, kind: MemberKind, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            kind,
            value_type,
            annotations: Vec::new(),
        }
    }

    pub fn with(mut self, annotation: MemberAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// Statically registered description of a type and its declared members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<TypeAnnotation>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            members: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    pub fn with(mut self, annotation: TypeAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn find_member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Members in visiting order: properties, then fields, then anything else,
    /// each group in declaration order.
    pub fn members_in_visit_order(&self) -> impl Iterator<Item = &MemberDescriptor> {
        self.members_of_kind(MemberKind::Property)
            .chain(self.members_of_kind(MemberKind::Field))
            .chain(self.members_of_kind(MemberKind::Method))
    }

    fn members_of_kind(&self, kind: MemberKind) -> impl Iterator<Item = &MemberDescriptor> {
        self.members.iter().filter(move |m| m.kind == kind)
    }
}
