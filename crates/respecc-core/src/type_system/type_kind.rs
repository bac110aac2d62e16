use super::{ClassId, TypeId};

/// The kind/variant of a type
///
/// Primitives and `Any` are nominal singletons. Arrays and dictionaries are
/// structural: two of them are the same type when their serialized structure
/// matches. Objects are nominal: each class declaration owns exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Number,
    String,
    Boolean,
    Null,

    /// Statically unchecked type, assignable to and from anything
    Any,

    /// Array with a single element type
    Array { element: TypeId },

    /// Dictionary from key type to value type
    Dictionary { key: TypeId, value: TypeId },

    /// Instance type of a declared class
    Object { class: ClassId, name: String },
}

impl TypeKind {
    /// Returns true if this is a primitive type (including `Any`)
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Number | Self::String | Self::Boolean | Self::Null | Self::Any
        )
    }

    /// Returns true if equality on this kind is structural
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Array { .. } | Self::Dictionary { .. })
    }

    /// Returns true if equality on this kind is by identity
    pub const fn is_nominal(&self) -> bool {
        !self.is_structural()
    }

    /// Returns the name of the type for display purposes
    pub fn name(&self) -> String {
        match self {
            Self::Number => "Number".to_string(),
            Self::String => "String".to_string(),
            Self::Boolean => "Boolean".to_string(),
            Self::Null => "Null".to_string(),
            Self::Any => "Any".to_string(),
            Self::Array { .. } => "Array".to_string(),
            Self::Dictionary { .. } => "Dictionary".to_string(),
            Self::Object { name, .. } => name.clone(),
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_kinds() {
        assert!(TypeKind::Number.is_primitive());
        assert!(TypeKind::Any.is_primitive());
        assert!(
            !TypeKind::Array {
                element: TypeId::NUMBER
            }
            .is_primitive()
        );
    }

    #[test]
    fn test_structural_kinds() {
        let dict = TypeKind::Dictionary {
            key: TypeId::STRING,
            value: TypeId::NUMBER,
        };
        assert!(dict.is_structural());
        assert!(TypeKind::Boolean.is_nominal());
        assert!(
            TypeKind::Object {
                class: ClassId::new(0),
                name: "Dog".to_string()
            }
            .is_nominal()
        );
    }

    #[test]
    fn test_object_name() {
        let kind = TypeKind::Object {
            class: ClassId::new(2),
            name: "Dog".to_string(),
        };
        assert_eq!(kind.to_string(), "Dog");
    }
}
