//! Library surface of the `lifexp` CLI.
//!
//! The binary in `main.rs` is a thin shell over these modules so the
//! command implementations stay testable.

pub mod cli;
pub mod commands;
pub mod logging;
