//! Core shared types for Harbor.
//!
//! This crate is intentionally small: project identity plus the cooperative
//! cancellation/progress context that is threaded through every operation
//! that can block.

mod cancel;
mod progress;
mod project;

pub use cancel::{CancellationToken, Cancelled};
pub use progress::Progress;
pub use project::{Project, ProjectId};
