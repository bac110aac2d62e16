//! Abstract Syntax Tree (AST) definitions for Respecc++.
//!
//! Nodes are produced without any type or scope information. Semantic
//! analysis fills the annotation slots (`resolved_type`, `body_scope`,
//! `class_id`, call targets) in place.

use respecc_core::type_system::{ClassId, TypeId};
use respecc_core::{ScopeId, Span};

/// A complete Respecc++ program (compilation unit).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// A block of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl Block {
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            span: Span::default(),
        }
    }
}

/// Statements in Respecc++.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Variable declaration: `gimme name[: type] [= expr]`
    Variable(VariableDeclaration),

    /// Assignment: `target = expr`
    Assignment(Assignment),

    /// Function declaration
    Function(FunctionDeclaration),

    /// Class declaration
    Class(ClassDeclaration),

    /// Class constructor, legal only as a class member
    Constructor(Constructor),

    /// `if` / `else if` / `else`
    Conditional(Conditional),

    While(WhileLoop),

    For(ForLoop),

    /// Return statement: `return [expr]`
    Return(Return),

    Break { span: Span },

    /// Expression statement
    Expression(Expression),
}

impl Statement {
    /// Returns the span of this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Variable(decl) => decl.span,
            Self::Assignment(assign) => assign.span,
            Self::Function(func) => func.span,
            Self::Class(class) => class.span,
            Self::Constructor(ctor) => ctor.span,
            Self::Conditional(cond) => cond.span,
            Self::While(while_loop) => while_loop.span,
            Self::For(for_loop) => for_loop.span,
            Self::Return(ret) => ret.span,
            Self::Break { span } => *span,
            Self::Expression(expr) => expr.span,
        }
    }

    /// Returns true for statements that end the enclosing block unconditionally
    #[must_use]
    pub fn is_terminator(&self) -> bool {
        matches!(self, Self::Return(_) | Self::Break { .. })
    }
}

/// Type annotation as written in source
#[derive(Debug, Clone, PartialEq)]
pub enum TypeAnnotation {
    /// A primitive or class name
    Named { name: String, span: Span },
    /// `[T]`
    Array(Box<TypeAnnotation>),
    /// `{K:V}`
    Dictionary(Box<TypeAnnotation>, Box<TypeAnnotation>),
}

impl TypeAnnotation {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            span: Span::default(),
        }
    }

    #[must_use]
    pub fn array(element: TypeAnnotation) -> Self {
        Self::Array(Box::new(element))
    }

    #[must_use]
    pub fn dictionary(key: TypeAnnotation, value: TypeAnnotation) -> Self {
        Self::Dictionary(Box::new(key), Box::new(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: String,
    pub type_annotation: Option<TypeAnnotation>,
    pub initializer: Option<Expression>,
    pub span: Span,
    /// Declared or inferred type, set by analysis
    pub resolved_type: Option<TypeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Identifier, member access or subscript
    pub target: Expression,
    pub value: Expression,
    pub span: Span,
}

/// Function or method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    /// Untyped parameters accept `Any`
    pub type_annotation: Option<TypeAnnotation>,
    pub span: Span,
    pub resolved_type: Option<TypeId>,
}

/// Named function declaration, at top level or as a class method.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Missing return annotations mean `Any`
    pub return_type: Option<TypeAnnotation>,
    pub body: Block,
    pub span: Span,
    /// Resolved return type, set during signature analysis
    pub resolved_type: Option<TypeId>,
    /// Whether a return statement satisfied the declared return type
    pub type_resolved: bool,
    /// Scope holding the parameters and body declarations
    pub body_scope: Option<ScopeId>,
}

/// Class constructor: `Name(params) { ... }` inside the class body.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
    pub body_scope: Option<ScopeId>,
    /// Class this constructor instantiates, set by analysis
    pub class_id: Option<ClassId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub name: String,
    pub body: ClassBlock,
    pub span: Span,
    pub class_id: Option<ClassId>,
    pub body_scope: Option<ScopeId>,
    /// Set once the constructor overloads were checked for ambiguity
    pub overloads_validated: bool,
}

/// Member list of a class: fields, methods, constructors and nested classes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassBlock {
    pub members: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Expression,
    pub then_block: Block,
    pub else_ifs: Vec<ElseIf>,
    pub else_block: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    pub condition: Expression,
    pub block: Block,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Block,
    pub span: Span,
}

/// `for (init; condition; update) { ... }`, every header part optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub initializer: Option<Box<VariableDeclaration>>,
    pub condition: Option<Expression>,
    pub update: Option<Box<Statement>>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<Expression>,
    pub span: Span,
}

/// Expression node with its annotation slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
    /// Static type, set by analysis
    pub resolved_type: Option<TypeId>,
}

impl Expression {
    #[must_use]
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Self {
            kind,
            span,
            resolved_type: None,
        }
    }

    /// Replaces the span of this expression.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the value of a number literal.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            ExpressionKind::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of a boolean literal.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self.kind {
            ExpressionKind::Boolean(value) => Some(value),
            _ => None,
        }
    }
}

/// Expression variants in Respecc++.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Number(f64),

    String(String),

    /// `Yes` / `No`
    Boolean(bool),

    Null,

    /// Reference to a variable, function or class by name
    Identifier(String),

    /// The enclosing class instance
    This,

    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },

    /// Prefix operation: `op expr`
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },

    /// Postfix operation: `expr op`
    Postfix {
        operand: Box<Expression>,
        operator: PostfixOperator,
    },

    /// `condition ? then : otherwise`
    Ternary {
        condition: Box<Expression>,
        then_branch: Box<Expression>,
        else_branch: Box<Expression>,
    },

    Call(Call),

    /// Member access: `object.field`
    Member {
        object: Box<Expression>,
        field: String,
    },

    /// Subscript: `collection[index]`
    Subscript {
        object: Box<Expression>,
        index: Box<Expression>,
    },

    /// Array literal: `[expr, ...]`
    Array(Vec<Expression>),

    /// Dictionary literal: `{key: value, ...}`
    Dictionary(Vec<DictEntry>),

    Lambda(Box<Lambda>),
}

/// Function call, method call or instantiation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Identifier or member access
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    /// Resolved call target, set by analysis
    pub target: Option<CallTarget>,
}

/// What a call site resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallTarget {
    /// A standard library function
    Builtin(String),
    /// A user-declared top-level function
    Function(String),
    /// A method of a class
    Method { class: ClassId, name: String },
    /// Instantiation of a class
    Constructor(ClassId),
    /// Call through an `Any`-typed value, checked at runtime
    Dynamic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
    pub key: Expression,
    pub value: Expression,
}

/// Anonymous function.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub parameters: Vec<Parameter>,
    pub body: LambdaBody,
    pub body_scope: Option<ScopeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LambdaBody {
    /// `(params) => { ... }`
    Block(Block),
    /// `(params) => expr`
    Expression(Box<Expression>),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Logical
    Or,
    And,

    // Relational
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl BinaryOperator {
    /// Returns true for operators whose result takes the left operand's type
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Modulo | Self::Power
        )
    }

    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(
            self,
            Self::Less
                | Self::LessEqual
                | Self::Greater
                | Self::GreaterEqual
                | Self::Equal
                | Self::NotEqual
        )
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
    Increment,
    Decrement,
}

/// Postfix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOperator {
    Increment,
    Decrement,
}
