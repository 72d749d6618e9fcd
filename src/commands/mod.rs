//! CLI command implementations.
//!
//! Available commands:
//! - **evaluate**: Score a survey export and write the output artifacts
//! - **init**: Create a default riskmap.toml configuration file

pub mod evaluate;
pub mod init;

pub use evaluate::{evaluate, EvaluateOptions};
pub use init::init_config;
