use serde::Serialize;

use crate::descriptor::{MemberDescriptor, MemberKind, TypeDescriptor, ValueType};
use crate::error::CoreError;
use crate::value::{Object, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Property,
    Field,
}

/// Read capability for one member of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Getter {
    pub owner: String,
    pub member: String,
    pub kind: AccessorKind,
    pub value_type: ValueType,
}

impl Getter {
    /// Read the member from an instance. Missing members read as `None`.
    pub fn get<'a>(&self, instance: &'a Object) -> Option<&'a Value> {
        instance.get(&self.member)
    }

    /// Whether the accessor yields zero or more values rather than exactly one.
    pub fn is_collection(&self) -> bool {
        self.value_type.is_collection()
    }
}

/// Build the accessor for a member declared on `owner`.
pub fn resolve_accessor(
    owner: &TypeDescriptor,
    member: &MemberDescriptor,
) -> Result<Getter, CoreError> {
    let kind = match member.kind {
        MemberKind::Property => AccessorKind::Property,
        MemberKind::Field => AccessorKind::Field,
        other => {
            return Err(CoreError::UnsupportedMember {
                owner: owner.name.clone(),
                member: member.name.clone(),
                kind: other.as_str().to_string(),
            })
        }
    };

    Ok(Getter {
        owner: owner.name.clone(),
        member: member.name.clone(),
        kind,
        value_type: member.value_type.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ScalarKind;

    #[test]
    fn test_property_and_field_accessors() {
        let owner = TypeDescriptor::new("Contact");
        let name = MemberDescriptor::property("Name", ValueType::Scalar(ScalarKind::String));
        let getter = resolve_accessor(&owner, &name).unwrap();
        assert_eq!(getter.kind, AccessorKind::Property);

        let instance = Object::new("Contact").with("Name", "Ada");
        assert_eq!(getter.get(&instance), Some(&Value::String("Ada".into())));
        assert_eq!(getter.get(&Object::new("Contact")), None);

        let field = MemberDescriptor::field("tags", ValueType::list(ValueType::Scalar(ScalarKind::String)));
        let getter = resolve_accessor(&owner, &field).unwrap();
        assert_eq!(getter.kind, AccessorKind::Field);
        assert!(getter.is_collection());
    }

    #[test]
    fn test_method_accessor_is_unsupported() {
        let owner = TypeDescriptor::new("Contact");
        let method = MemberDescriptor::method("FullName", ValueType::Scalar(ScalarKind::String));
        let err = resolve_accessor(&owner, &method).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnsupportedMember { ref member, .. } if member == "FullName"
        ));
    }
}
