//! Expose the CLI's internals for integration tests and `xtask`. Not intended
//! as a stable API.
pub mod cli;
pub mod demo;
pub mod error;
pub mod output;
