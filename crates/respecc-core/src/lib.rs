//! Core types and utilities for the Respecc++ compiler front end.
//!
//! This crate provides fundamental types, error handling, and shared utilities
//! used across all compiler stages: source spans, the crate-wide error type,
//! the type registry and the symbols that scopes and classes store.

pub mod error;
pub mod scope_id;
pub mod span;
pub mod symbol;
pub mod type_system;

pub use error::{Error, Result};
pub use scope_id::ScopeId;
pub use span::{Location, Span};
pub use symbol::{FunctionSignature, Symbol, SymbolKind};
