//! Abstract syntax tree for the Respecc++ language.
//!
//! This crate defines the tree the external parser hands to semantic
//! analysis, together with builders for constructing it programmatically.

pub mod ast;
pub mod builder;

pub use ast::{
    Assignment, BinaryOperator, Block, Call, CallTarget, ClassBlock, ClassDeclaration,
    Conditional, Constructor, DictEntry, ElseIf, Expression, ExpressionKind, ForLoop,
    FunctionDeclaration, Lambda, LambdaBody, Parameter, PostfixOperator, Program, Return,
    Statement, TypeAnnotation, UnaryOperator, VariableDeclaration, WhileLoop,
};
pub use builder::{BlockBuilder, ExprBuilder, ProgramBuilder, StmtBuilder};
