//! dashaway-cli library root.
//!
//! Re-exports the config and formatting modules so integration tests can
//! exercise them without going through the binary.

pub mod config;
pub mod output;
pub mod replace;
