/// Type system for the Respecc++ front end
///
/// This module provides:
/// - Singleton primitive types (Number, String, Boolean, Null) and `Any`
/// - Structural collection types (Array, Dictionary)
/// - Nominal class types with constructor overloads and member tables
/// - Assignability and equality rules shared by the analyzer
/// - The built-in functions injected into the root scope
mod builtins;
mod class;
mod registry;
mod type_id;
mod type_kind;
mod type_metadata;

pub use builtins::{BUILTIN_TYPE_NAMES, standard_functions};
pub use class::{ClassId, ClassInfo, ConstructorSignature};
pub use registry::TypeRegistry;
pub use type_id::TypeId;
pub use type_kind::TypeKind;
pub use type_metadata::TypeMetadata;
