//! Subcommand implementations.

pub mod contains;
pub mod get;
pub mod keys;
pub mod put;
pub mod remove;
