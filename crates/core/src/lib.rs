//! Viewport-driven stop markers for a transit map.
//!
//! [`StopMapSession`] reconciles markers against the stops inside the
//! current viewport, keeps a single selection, and fills a detail panel with
//! the lines serving the selected stop. [`SessionActor`] runs it against any
//! [`transit::StopDataSource`], such as the [`EnturClient`].

pub mod client;
pub mod config;
pub mod icon;
pub mod logging;
pub mod marker;
pub mod panel;
pub mod selection;
pub mod session;
pub mod surface;
pub mod viewport;

#[cfg(test)]
mod testing;

// Re-export transit from the transit crate
pub use stopmap_transit as transit;

pub use client::EnturClient;
pub use config::{ApiConfig, ConfigError, SessionConfig};
pub use logging::init_logging;
pub use session::StopMapSession;
pub use session::actor::SessionActor;
pub use surface::{DetailPanelSurface, GeoJsonMarkerLayer, MapSurface, Surfaces};

/// Failure to build a client from configuration
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("invalid client name header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("could not build http client: {0}")]
    Http(#[from] reqwest::Error),
}
