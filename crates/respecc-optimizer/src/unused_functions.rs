//! Removal of top-level functions that are never referenced.

use std::collections::HashSet;

use respecc_ast::{Program, Statement};
use tracing::debug;

use crate::OptimizationPass;

/// Removes top-level functions absent from the call-site set collected
/// during analysis. Methods are kept.
pub struct UnusedFunctionPass {
    call_sites: HashSet<String>,
}

impl UnusedFunctionPass {
    #[must_use]
    pub fn new(call_sites: HashSet<String>) -> Self {
        Self { call_sites }
    }
}

impl OptimizationPass for UnusedFunctionPass {
    fn name(&self) -> &str {
        "UnusedFunctions"
    }

    fn run(&self, program: &mut Program) -> bool {
        let before = program.statements.len();
        program.statements.retain(|statement| match statement {
            Statement::Function(func) if !self.call_sites.contains(&func.name) => {
                debug!(function = %func.name, "Removing uncalled function");
                false
            }
            _ => true,
        });
        program.statements.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respecc_ast::{Block, StmtBuilder};

    #[test]
    fn test_remove_only_uncalled_functions() {
        let mut program = Program {
            statements: vec![
                StmtBuilder::function("used", vec![], None, Block::default()),
                StmtBuilder::function("unused", vec![], None, Block::default()),
                StmtBuilder::class(
                    "Dog",
                    vec![StmtBuilder::function("bark", vec![], None, Block::default())],
                ),
            ],
            ..Program::default()
        };
        let pass = UnusedFunctionPass::new(HashSet::from(["used".to_string()]));

        assert!(pass.run(&mut program));
        assert_eq!(program.statements.len(), 2);
        assert!(!pass.run(&mut program));
    }
}
