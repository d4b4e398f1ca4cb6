//! dashaway-core
//!
//! Pure domain types shared by the editor, the analysis client and the
//! exporters. No network or filesystem dependency: this is the shared
//! vocabulary of the DashAway system.

pub mod error;
pub mod models;
