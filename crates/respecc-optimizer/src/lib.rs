//! Tree-rewriting optimizer for analyzed Respecc++ programs.
//!
//! The optimizer runs a list of passes over the annotated AST until none of
//! them changes it or the iteration cap is reached. Node kinds a pass does
//! not special-case are left untouched.

mod branch_pruning;
mod constant_folding;
mod dead_code_elimination;
mod pass;
mod unused_functions;
mod visit;

pub use branch_pruning::BranchPruningPass;
pub use constant_folding::ConstantFoldingPass;
pub use dead_code_elimination::DeadCodeEliminationPass;
pub use pass::OptimizationPass;
pub use unused_functions::UnusedFunctionPass;

use respecc_ast::Program;
use respecc_utils::OptimizerConfig;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Rounds after which the optimizer stops even if passes still report changes
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Optimizer that applies multiple passes to a program
pub struct Optimizer {
    passes: Vec<Box<dyn OptimizationPass>>,
    max_iterations: usize,
}

impl Optimizer {
    /// Creates an optimizer with every pass enabled.
    ///
    /// `call_sites` holds the names of the top-level functions the analyzed
    /// program references; top-level functions missing from it are removed.
    #[must_use]
    pub fn new(call_sites: HashSet<String>) -> Self {
        Self::from_config(&OptimizerConfig::default(), call_sites)
    }

    /// Creates an empty optimizer with no passes
    #[must_use]
    pub fn empty() -> Self {
        Self {
            passes: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Creates an optimizer with the passes switched on in `config`.
    ///
    /// A disabled optimizer has no passes.
    #[must_use]
    pub fn from_config(config: &OptimizerConfig, call_sites: HashSet<String>) -> Self {
        let mut optimizer = Self::empty().with_max_iterations(config.max_iterations);
        if !config.enabled {
            return optimizer;
        }
        if config.constant_folding {
            optimizer.add_pass(Box::new(ConstantFoldingPass));
        }
        if config.branch_pruning {
            optimizer.add_pass(Box::new(BranchPruningPass));
        }
        if config.dead_code {
            optimizer.add_pass(Box::new(DeadCodeEliminationPass));
        }
        if config.unused_functions {
            optimizer.add_pass(Box::new(UnusedFunctionPass::new(call_sites)));
        }
        optimizer
    }

    /// Sets the iteration cap
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Adds an optimization pass
    pub fn add_pass(&mut self, pass: Box<dyn OptimizationPass>) -> &mut Self {
        self.passes.push(pass);
        self
    }

    /// Names of the configured passes, in run order
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Runs all optimization passes on the program
    ///
    /// Runs passes in order, repeating until no changes are made. Returns
    /// `true` if the program was rewritten.
    #[instrument(skip_all, fields(passes = self.passes.len()))]
    pub fn optimize(&self, program: &mut Program) -> bool {
        let mut rewritten = false;

        for iteration in 1..=self.max_iterations {
            let mut changed = false;
            for pass in &self.passes {
                if pass.run(program) {
                    debug!(pass = pass.name(), iteration, "Pass changed the program");
                    changed = true;
                }
            }

            if !changed {
                return rewritten;
            }
            rewritten = true;
        }

        warn!(
            max_iterations = self.max_iterations,
            "Optimizer reached maximum iterations"
        );
        rewritten
    }

    /// Runs optimization passes once (no iteration)
    pub fn optimize_once(&self, program: &mut Program) -> bool {
        let mut changed = false;
        for pass in &self.passes {
            changed |= pass.run(program);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimizer_creation() {
        let optimizer = Optimizer::new(HashSet::new());
        assert_eq!(
            optimizer.pass_names(),
            ["ConstantFolding", "BranchPruning", "DeadCodeElimination", "UnusedFunctions"]
        );
    }

    #[test]
    fn test_empty_optimizer() {
        let optimizer = Optimizer::empty();
        assert!(optimizer.pass_names().is_empty());
    }

    #[test]
    fn test_from_config_switches() {
        let config = OptimizerConfig {
            dead_code: false,
            unused_functions: false,
            ..OptimizerConfig::default()
        };
        let optimizer = Optimizer::from_config(&config, HashSet::new());
        assert_eq!(optimizer.pass_names(), ["ConstantFolding", "BranchPruning"]);

        let disabled = OptimizerConfig {
            enabled: false,
            ..OptimizerConfig::default()
        };
        assert!(Optimizer::from_config(&disabled, HashSet::new())
            .pass_names()
            .is_empty());
    }

    #[test]
    fn test_optimize_empty_program() {
        let optimizer = Optimizer::new(HashSet::new());
        let mut program = Program::default();
        assert!(!optimizer.optimize(&mut program));
    }
}
