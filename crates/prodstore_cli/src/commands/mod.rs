//! CLI command implementations.

pub mod demo;
pub mod load;
pub mod shell;
