//! Library components of the `propmatch` CLI.

pub mod logging;
pub mod report;
