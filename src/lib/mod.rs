//! Shared library modules providing error types, terminal helpers, and telemetry initialization.

pub mod browser;
pub mod errors;
pub mod selector;
pub mod telemetry;
