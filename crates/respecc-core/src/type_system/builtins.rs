//! Built-in entities seeded into every root scope.

use super::TypeId;
use crate::{FunctionSignature, Symbol};

/// Type names bound in the root scope, with their singleton ids
pub const BUILTIN_TYPE_NAMES: [(&str, TypeId); 5] = [
    ("Number", TypeId::NUMBER),
    ("String", TypeId::STRING),
    ("Boolean", TypeId::BOOLEAN),
    ("Null", TypeId::NULL),
    ("Any", TypeId::ANY),
];

/// Returns the standard library functions, each marked `builtin`
///
/// Call sites resolving to these keep the marker so the generator can inline
/// them instead of emitting a user-function call.
pub fn standard_functions() -> Vec<Symbol> {
    let unary_numeric = || FunctionSignature::new(vec![TypeId::NUMBER], TypeId::NUMBER);

    vec![
        Symbol::builtin_function(
            "print",
            FunctionSignature::new(vec![TypeId::ANY], TypeId::ANY),
        ),
        Symbol::builtin_function("abs", unary_numeric()),
        Symbol::builtin_function("sqrt", unary_numeric()),
        Symbol::builtin_function("floor", unary_numeric()),
        Symbol::builtin_function(
            "pow",
            FunctionSignature::new(vec![TypeId::NUMBER, TypeId::NUMBER], TypeId::NUMBER),
        ),
    ]
}
