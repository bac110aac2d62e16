//! Per-node analysis routines.

mod classes;
mod control_flow;
mod core;
mod expressions;
mod functions;
mod program;
mod statements;

pub use core::Analyzer;
