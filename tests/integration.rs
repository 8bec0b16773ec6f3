#[path = "integration/common.rs"]
mod common;

#[path = "integration/print_mode.rs"]
mod print_mode;

#[path = "integration/account_resolution.rs"]
mod account_resolution;

#[path = "integration/error_reporting.rs"]
mod error_reporting;
