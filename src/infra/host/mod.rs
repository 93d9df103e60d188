//! Suspension-host backends.

pub mod memory;
#[cfg(feature = "tokio-runtime")]
pub mod timer;

pub use memory::{RecordingHost, Suspension};
#[cfg(feature = "tokio-runtime")]
pub use timer::TimerHost;
