//! Builder utilities for constructing Respecc++ ASTs.
//!
//! The builders stand in for the external parser: they create nodes with
//! empty annotation slots and default spans unless one is given.

mod block;
mod expression;
mod statement;

pub use block::{BlockBuilder, ProgramBuilder};
pub use expression::ExprBuilder;
pub use statement::StmtBuilder;
