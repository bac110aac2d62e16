/// Unique identifier for types in the Respecc++ type system
///
/// TypeId is a lightweight, copyable handle into the [`TypeRegistry`](super::TypeRegistry).
/// Primitive and `Any` ids are fixed singletons; every array, dictionary and
/// class type gets a fresh id when it is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u64);

impl TypeId {
    /// Creates a new TypeId from a u64 value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Built-in type IDs (0-999 reserved for primitives)
    pub const NUMBER: TypeId = TypeId(0);
    pub const STRING: TypeId = TypeId(1);
    pub const BOOLEAN: TypeId = TypeId(2);
    pub const NULL: TypeId = TypeId(3);
    pub const ANY: TypeId = TypeId(4);

    /// Starting ID for constructed (collection and class) types
    pub const USER_DEFINED_START: u64 = 1000;

    /// Returns true for the statically unchecked `Any` type
    pub const fn is_any(self) -> bool {
        self.0 == Self::ANY.0
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}
