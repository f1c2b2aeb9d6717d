//! Drives a [`StopMapSession`] on an actix context.
//!
//! All session state is touched from the actor only. Fetches run as actor
//! futures and fold their result back into the session when they resolve,
//! so the map and panel surfaces never need to be shared or locked.

use std::sync::Arc;

use actix::{
    Actor, ActorFutureExt, AsyncContext, Context, Handler, Message, MessageResult, SpawnHandle,
    WrapFuture,
};
use stopmap_transit::{StopDataSource, StopIdentifier};
use tracing::debug;

use super::{StopMapSession, ViewportOutcome};
use crate::config::SessionConfig;
use crate::selection::Selection;
use crate::surface::{DetailPanelSurface, MapSurface, Surfaces};
use crate::viewport::{DebounceToken, Viewport};

pub struct SessionActor<D, M, P> {
    session: StopMapSession,
    source: Arc<D>,
    map: M,
    panel: P,
    debounce_timer: Option<SpawnHandle>,
}

impl<D, M, P> SessionActor<D, M, P>
where
    D: StopDataSource + 'static,
    M: MapSurface + Unpin + 'static,
    P: DetailPanelSurface + Unpin + 'static,
{
    pub fn new(config: SessionConfig, source: Arc<D>, map: M, panel: P) -> Self {
        Self {
            session: StopMapSession::new(config),
            source,
            map,
            panel,
            debounce_timer: None,
        }
    }

    fn on_viewport(&mut self, outcome: ViewportOutcome, ctx: &mut Context<Self>) {
        if let Some(handle) = self.debounce_timer.take() {
            ctx.cancel_future(handle);
        }

        if let ViewportOutcome::Scheduled(token) = outcome {
            let quiet = self.session.config().debounce();
            let handle = ctx.run_later(quiet, move |actor, ctx| {
                actor.debounce_timer = None;
                actor.refresh(token, ctx);
            });
            self.debounce_timer = Some(handle);
        }
    }

    fn refresh(&mut self, token: DebounceToken, ctx: &mut Context<Self>) {
        let Some(request) = self.session.debounce_elapsed(token) else {
            return;
        };

        let source = Arc::clone(&self.source);
        let fetch = async move { source.fetch_stops_in_bounds(request.bounds).await };

        ctx.spawn(fetch.into_actor(self).map(move |result, actor, _| {
            let mut surfaces = Surfaces::new(&mut actor.map, &mut actor.panel);
            actor
                .session
                .refresh_completed(request.ticket, result, &mut surfaces);
        }));
    }
}

impl<D, M, P> Actor for SessionActor<D, M, P>
where
    D: StopDataSource + 'static,
    M: MapSurface + Unpin + 'static,
    P: DetailPanelSurface + Unpin + 'static,
{
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let mut surfaces = Surfaces::new(&mut self.map, &mut self.panel);
        // the initial load skips the quiet period
        if let ViewportOutcome::Scheduled(token) = self.session.start(&mut surfaces) {
            debug!("initial load");
            self.refresh(token, ctx);
        }
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ViewportChanged(pub Viewport);

#[derive(Message)]
#[rtype(result = "()")]
pub struct MarkerClicked(pub StopIdentifier);

#[derive(Message)]
#[rtype(result = "()")]
pub struct BackgroundClicked;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Stops with a live marker, sorted
    pub stop_ids: Vec<StopIdentifier>,
    pub selected: Option<StopIdentifier>,
    pub refresh_pending: bool,
}

#[derive(Message)]
#[rtype(result = "SessionSnapshot")]
pub struct Snapshot;

impl<D, M, P> Handler<ViewportChanged> for SessionActor<D, M, P>
where
    D: StopDataSource + 'static,
    M: MapSurface + Unpin + 'static,
    P: DetailPanelSurface + Unpin + 'static,
{
    type Result = ();

    fn handle(&mut self, msg: ViewportChanged, ctx: &mut Self::Context) {
        let mut surfaces = Surfaces::new(&mut self.map, &mut self.panel);
        let outcome = self.session.viewport_changed(msg.0, &mut surfaces);
        self.on_viewport(outcome, ctx);
    }
}

impl<D, M, P> Handler<MarkerClicked> for SessionActor<D, M, P>
where
    D: StopDataSource + 'static,
    M: MapSurface + Unpin + 'static,
    P: DetailPanelSurface + Unpin + 'static,
{
    type Result = ();

    fn handle(&mut self, msg: MarkerClicked, ctx: &mut Self::Context) {
        let mut surfaces = Surfaces::new(&mut self.map, &mut self.panel);
        let Some(request) = self.session.marker_clicked(&msg.0, &mut surfaces) else {
            return;
        };

        let source = Arc::clone(&self.source);
        let stop_id = request.stop_id.clone();
        let fetch = async move { source.fetch_stop_detail(&stop_id).await };

        ctx.spawn(fetch.into_actor(self).map(move |result, actor, _| {
            let mut surfaces = Surfaces::new(&mut actor.map, &mut actor.panel);
            actor
                .session
                .detail_completed(&request, result, &mut surfaces);
        }));
    }
}

impl<D, M, P> Handler<BackgroundClicked> for SessionActor<D, M, P>
where
    D: StopDataSource + 'static,
    M: MapSurface + Unpin + 'static,
    P: DetailPanelSurface + Unpin + 'static,
{
    type Result = ();

    fn handle(&mut self, _: BackgroundClicked, _: &mut Self::Context) {
        let mut surfaces = Surfaces::new(&mut self.map, &mut self.panel);
        self.session.background_clicked(&mut surfaces);
    }
}

impl<D, M, P> Handler<Snapshot> for SessionActor<D, M, P>
where
    D: StopDataSource + 'static,
    M: MapSurface + Unpin + 'static,
    P: DetailPanelSurface + Unpin + 'static,
{
    type Result = MessageResult<Snapshot>;

    fn handle(&mut self, _: Snapshot, _: &mut Self::Context) -> Self::Result {
        let selected = match self.session.selection() {
            Selection::None => None,
            Selection::Selected { stop_id, .. } => Some(stop_id.clone()),
        };

        MessageResult(SessionSnapshot {
            stop_ids: self.session.registry().stop_ids(),
            selected,
            refresh_pending: self.session.has_pending_refresh(),
        })
    }
}
