//! Infrastructure adapters for oracle and suspension-host backends.

pub mod oracle;
pub mod host;
