//! # stopmap-transit
//!
//! Stop data model and pluggable data sources for the stop map engine.
//!
//! ## Features
//!
//! - **Typed identifiers**: `Arc<str>` keys shared across registries and caches
//! - **Stop model**: stop places, quays, lines and bounding boxes
//! - **Pluggable networking**: implement [`StopDataSource`] for any backend
//! - **Offline source**: R-tree backed [`StaticStopSource`]
//!
//! ## Example
//!
//! ```
//! use stopmap_transit::prelude::*;
//! use geo::Point;
//!
//! let stop = Stop::new(
//!     "NSR:StopPlace:58366",
//!     "Jernbanetorget",
//!     59.9119,
//!     10.7504,
//!     [TransportMode::new("bus")],
//! );
//!
//! let source = StaticStopSource::from_data(vec![stop], vec![]);
//!
//! let sentrum = BoundingBox::from_corners(Point::new(10.73, 59.90), Point::new(10.76, 59.92));
//! assert_eq!(source.stops_in_bounds(&sentrum).len(), 1);
//! ```

pub mod identifiers;
pub mod models;
pub mod network;
pub mod provider;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{bounds::*, types::*};
    pub use crate::network::traits::*;
    pub use crate::provider::static_provider::StaticStopSource;
}

pub use prelude::*;
