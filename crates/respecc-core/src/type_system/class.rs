use std::collections::HashMap;

use super::TypeId;
use crate::{ScopeId, Span, Symbol};

/// Handle to a class descriptor owned by the [`TypeRegistry`](super::TypeRegistry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Parameter list of one constructor overload
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorSignature {
    pub parameters: Vec<TypeId>,
    pub span: Span,
}

/// Nominal class descriptor
///
/// Every expression whose static type is this class refers to the same
/// descriptor through its `TypeId`, so the member table exists exactly once.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub id: ClassId,
    pub name: String,
    /// The object type instances of this class have
    pub type_id: TypeId,
    /// Registered constructor overloads, in declaration order
    pub constructors: Vec<ConstructorSignature>,
    /// Fields, methods and nested classes visible through member access
    pub members: HashMap<String, Symbol>,
    /// Scope holding the class body's declarations
    pub body_scope: Option<ScopeId>,
    /// Set once the body has been analyzed and the member table copied
    pub finalized: bool,
}

impl ClassInfo {
    pub fn new(id: ClassId, name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            id,
            name: name.into(),
            type_id,
            constructors: Vec::new(),
            members: HashMap::new(),
            body_scope: None,
            finalized: false,
        }
    }

    /// Looks up a member by name.
    pub fn member(&self, name: &str) -> Option<&Symbol> {
        self.members.get(name)
    }

    /// Parameter lists of every constructor overload.
    ///
    /// A class without declared constructors is instantiated with no arguments.
    pub fn overloads(&self) -> Vec<Vec<TypeId>> {
        if self.constructors.is_empty() {
            vec![Vec::new()]
        } else {
            self.constructors
                .iter()
                .map(|ctor| ctor.parameters.clone())
                .collect()
        }
    }
}
