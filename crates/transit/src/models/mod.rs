//! Stop data models and error types.

pub mod bounds;
pub mod types;

// Re-exports for convenience
pub use bounds::BoundingBox;
pub use types::{FetchError, Line, Quay, Result, Stop, StopDetail};
