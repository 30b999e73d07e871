//! Command-line surface for the `pipepress` binary.

pub mod args;
pub mod constants;
