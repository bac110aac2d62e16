//! Stable handle for scopes kept alive after analysis.

use serde::{Deserialize, Serialize};

/// Index of a scope inside the analyzer's scope arena.
///
/// Function, constructor, lambda and class declarations keep the id of their
/// body scope so later passes can still look up parameters and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The root scope seeded with the built-in types and functions.
    pub const ROOT: ScopeId = ScopeId(0);

    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}
