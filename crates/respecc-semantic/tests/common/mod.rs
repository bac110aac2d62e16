//! Common test utilities for semantic analysis tests.

#![allow(dead_code)]

use respecc_ast::{Block, Program, Statement};
use respecc_core::Result;
use respecc_semantic::{Analysis, analyze};
use tracing::Level;

/// Routes analysis logs to the test harness; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::DEBUG)
        .try_init();
}

/// Builds a program from top-level statements.
pub fn program(statements: Vec<Statement>) -> Program {
    Program {
        statements,
        ..Program::default()
    }
}

/// Builds a block from statements.
pub fn block(statements: Vec<Statement>) -> Block {
    Block::new(statements)
}

/// Analyzes a program built from `statements`.
pub fn analyze_statements(statements: Vec<Statement>) -> Result<(Program, Analysis)> {
    init_tracing();
    let mut program = program(statements);
    let analysis = analyze(&mut program)?;
    Ok((program, analysis))
}

/// Helper function to check if a program fails semantic analysis.
pub fn should_fail(statements: Vec<Statement>) -> bool {
    analyze_statements(statements).is_err()
}

/// Helper function to check if a program passes semantic analysis.
pub fn should_pass(statements: Vec<Statement>) -> bool {
    analyze_statements(statements).is_ok()
}

/// Returns the message of the error a failing program produces.
///
/// # Panics
/// Panics if the program passes analysis.
pub fn error_message(statements: Vec<Statement>) -> String {
    match analyze_statements(statements) {
        Ok(_) => panic!("expected semantic analysis to fail"),
        Err(err) => err.message(),
    }
}
