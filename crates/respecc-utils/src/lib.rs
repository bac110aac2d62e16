//! Shared utilities for Respecc++ tooling.

pub mod config;

pub use config::{CONFIG_FILE, Config, OptimizerConfig, PackageConfig};
