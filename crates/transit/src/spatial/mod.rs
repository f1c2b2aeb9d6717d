//! Spatial indexing utilities.

pub mod index;

pub use index::{envelope_of, StopNode};
