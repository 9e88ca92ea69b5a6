//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod query;

pub use args::{Cli, Commands};
