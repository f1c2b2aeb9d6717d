//! The reconciliation engine as an explicit, synchronous state machine.
//!
//! [`StopMapSession`] owns the registry, icon cache, selection, debounce
//! slot and request sequences. It never performs I/O itself: operations
//! that need a timer or a fetch hand back a token or request, and the
//! caller reports completion through the matching `*_elapsed` /
//! `*_completed` method. [`actor::SessionActor`] drives it on an actix
//! context.

use stopmap_transit::{BoundingBox, FetchError, Result, Stop, StopDetail, StopIdentifier};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::icon::IconCache;
use crate::marker::{MarkerRegistry, ReconcileSummary, reconcile};
use crate::panel::render_detail;
use crate::selection::{Selection, SelectionManager};
use crate::surface::{Notice, NoticeKind, Surfaces};
use crate::viewport::{DebounceToken, Debouncer, Viewport, ViewportController, ViewportDecision};

pub mod actor;
pub mod sequence;

pub use sequence::{RequestSequence, RequestTicket};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefreshRequest {
    pub ticket: RequestTicket,
    pub bounds: BoundingBox,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub ticket: RequestTicket,
    pub stop_id: StopIdentifier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportOutcome {
    /// Below the zoom gate; `markers` were removed
    Cleared { markers: usize },
    /// Arm a timer of [`Debouncer::quiet_period`] for this token
    Scheduled(DebounceToken),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied(ReconcileSummary),
    Stale,
    Failed(FetchError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailOutcome {
    Shown,
    Stale,
    Failed(FetchError),
}

#[derive(Debug)]
pub struct StopMapSession {
    config: SessionConfig,
    viewport: ViewportController,
    debouncer: Debouncer<BoundingBox>,
    refreshes: RequestSequence,
    details: RequestSequence,
    registry: MarkerRegistry,
    icons: IconCache,
    selection: SelectionManager,
}

impl StopMapSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            viewport: ViewportController::new(config.min_zoom),
            debouncer: Debouncer::new(config.debounce()),
            refreshes: RequestSequence::new(),
            details: RequestSequence::new(),
            registry: MarkerRegistry::new(),
            icons: IconCache::new(),
            selection: SelectionManager::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    pub fn icons(&self) -> &IconCache {
        &self.icons
    }

    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    pub fn last_viewport(&self) -> Option<&Viewport> {
        self.viewport.last()
    }

    pub fn has_pending_refresh(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Initial load: evaluate whatever the map currently shows
    pub fn start(&mut self, surfaces: &mut Surfaces<'_>) -> ViewportOutcome {
        let viewport = surfaces.map.viewport();
        self.viewport_changed(viewport, surfaces)
    }

    pub fn viewport_changed(
        &mut self,
        viewport: Viewport,
        surfaces: &mut Surfaces<'_>,
    ) -> ViewportOutcome {
        match self.viewport.observe(viewport) {
            ViewportDecision::BelowMinimum => {
                self.debouncer.cancel();
                self.refreshes.invalidate();
                self.details.invalidate();
                self.selection.clear(&mut self.registry, surfaces);
                let markers = self.registry.clear(&mut *surfaces.map);
                if markers > 0 {
                    info!(markers, zoom = viewport.zoom, "cleared markers below minimum zoom");
                }
                ViewportOutcome::Cleared { markers }
            }
            ViewportDecision::Refresh(bounds) => {
                let token = self.debouncer.schedule(bounds);
                debug!(?token, zoom = viewport.zoom, "refresh scheduled");
                ViewportOutcome::Scheduled(token)
            }
        }
    }

    /// The quiet period for `token` elapsed. Returns the fetch to issue, or
    /// `None` if a newer event replaced it.
    pub fn debounce_elapsed(&mut self, token: DebounceToken) -> Option<RefreshRequest> {
        let bounds = self.debouncer.fire(token)?;
        let ticket = self.refreshes.issue();
        debug!(ticket = ticket.get(), ?bounds, "refresh issued");
        Some(RefreshRequest { ticket, bounds })
    }

    pub fn refresh_completed(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Stop>>,
        surfaces: &mut Surfaces<'_>,
    ) -> RefreshOutcome {
        if !self.refreshes.is_current(ticket) {
            debug!(ticket = ticket.get(), "dropping superseded refresh response");
            return RefreshOutcome::Stale;
        }

        let stops = match result {
            Ok(stops) => stops,
            Err(err) => {
                warn!(ticket = ticket.get(), error = %err, "refresh failed");
                surfaces.map.notify(&Notice {
                    kind: NoticeKind::RefreshFailed,
                    message: format!("Could not load stops: {err}"),
                });
                return RefreshOutcome::Failed(err);
            }
        };

        let previous = std::mem::take(&mut self.registry);
        let (registry, summary) = reconcile(
            previous,
            stops,
            &mut self.icons,
            &mut self.selection,
            surfaces,
        );
        self.registry = registry;

        info!(
            ticket = ticket.get(),
            added = summary.added.len(),
            removed = summary.removed.len(),
            retained = summary.retained,
            "applied refresh"
        );
        RefreshOutcome::Applied(summary)
    }

    /// Select the stop's marker. Returns the detail fetch to issue, or
    /// `None` if the stop has no live marker.
    pub fn marker_clicked(
        &mut self,
        stop_id: &StopIdentifier,
        surfaces: &mut Surfaces<'_>,
    ) -> Option<DetailRequest> {
        if !self.selection.select(stop_id, &mut self.registry, surfaces) {
            return None;
        }

        let ticket = self.details.issue();
        debug!(ticket = ticket.get(), stop = %stop_id, "detail requested");
        Some(DetailRequest {
            ticket,
            stop_id: stop_id.clone(),
        })
    }

    pub fn background_clicked(&mut self, surfaces: &mut Surfaces<'_>) {
        self.details.invalidate();
        if let Some(stop) = self.selection.clear(&mut self.registry, surfaces) {
            debug!(stop = %stop, "selection cleared");
        }
    }

    pub fn detail_completed(
        &mut self,
        request: &DetailRequest,
        result: Result<StopDetail>,
        surfaces: &mut Surfaces<'_>,
    ) -> DetailOutcome {
        // a reconcile can drop the selection without a new ticket
        let current = self.details.is_current(request.ticket);
        if !current || !self.selection.is_selected(&request.stop_id) {
            debug!(stop = %request.stop_id, "dropping superseded detail response");
            return DetailOutcome::Stale;
        }

        match result {
            Ok(detail) => {
                let content = render_detail(&detail, &self.config.colors);
                surfaces.panel.show_detail(&content);
                DetailOutcome::Shown
            }
            Err(err) => {
                warn!(stop = %request.stop_id, error = %err, "detail fetch failed");
                surfaces.map.notify(&Notice {
                    kind: NoticeKind::DetailFailed,
                    message: format!("Could not load lines for this stop: {err}"),
                });
                DetailOutcome::Failed(err)
            }
        }
    }
}
