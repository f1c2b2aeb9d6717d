//! Pluggable networking traits.
//!
//! External crates implement these to provide stop data. Each call is a
//! single request/response exchange; retrying is left to the caller.

use std::future::Future;
use std::pin::Pin;

use crate::identifiers::StopIdentifier;
use crate::models::{BoundingBox, Result, Stop, StopDetail};

/// Query/response access to a transit stop API
pub trait StopDataSource: Send + Sync {
    /// All stop places inside `bounds`
    fn fetch_stops_in_bounds<'a>(
        &'a self,
        bounds: BoundingBox,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Stop>>> + Send + 'a>>;

    /// Name, modes and per-quay lines of a single stop place
    fn fetch_stop_detail<'a>(
        &'a self,
        stop_id: &'a StopIdentifier,
    ) -> Pin<Box<dyn Future<Output = Result<StopDetail>> + Send + 'a>>;
}
