//! Oracle backends.

pub mod http;
pub mod memory;

pub use http::HttpOracle;
pub use memory::{RecordedCall, StaticOracle};
