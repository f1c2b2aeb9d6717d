//! Networking abstractions (implemented by consumers)

pub mod traits;

pub use traits::StopDataSource;
