//! The next-train engine: live reconciliation plus queries.
//!
//! Owns the immutable [`ScheduleIndex`] and the live arrival set. The
//! live set is refreshed by a background task and replaced by reference
//! swap, so queries never observe a partially-updated cycle: they read
//! whatever the most recently completed refresh produced.

mod query;

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::domain::Arrival;
use crate::feed::{MetraClient, live_arrivals};
use crate::schedule::ScheduleIndex;

pub use query::{Board, NextTrains, merge_board};

/// Schedule resolution and live-merge engine.
///
/// Cheap to clone; all clones share the same index and live set.
#[derive(Clone)]
pub struct Engine {
    index: Arc<ScheduleIndex>,
    client: MetraClient,
    config: EngineConfig,

    /// Most recent complete live snapshot. Written only by the refresh
    /// task, via whole-reference swap.
    live: Arc<RwLock<Arc<Vec<Arrival>>>>,

    /// When the last refresh cycle succeeded; `None` until the first one
    /// does.
    last_update: Arc<RwLock<Option<Instant>>>,

    shutdown: watch::Sender<bool>,
}

impl Engine {
    /// Create an engine over a built schedule index.
    pub fn new(index: ScheduleIndex, client: MetraClient, config: EngineConfig) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            index: Arc::new(index),
            client,
            config,
            live: Arc::new(RwLock::new(Arc::new(Vec::new()))),
            last_update: Arc::new(RwLock::new(None)),
            shutdown,
        }
    }

    /// The underlying schedule index.
    pub fn index(&self) -> &ScheduleIndex {
        &self.index
    }

    /// Spawn the background refresh loop.
    ///
    /// The first refresh happens immediately, then every configured
    /// interval until [`Engine::stop`] is called.
    pub fn start(&self) -> tokio::task::JoinHandle<()> {
        let engine = self.clone();
        let shutdown = self.shutdown.subscribe();
        tokio::spawn(engine.refresh_loop(shutdown))
    }

    /// Signal the refresh loop to terminate before its next sleep.
    ///
    /// An in-flight fetch is allowed to complete or time out naturally.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// When the last refresh cycle succeeded, or `None` if no cycle has
    /// ever completed. Callers can use this to avoid trusting results
    /// before any live data has arrived.
    pub async fn last_update(&self) -> Option<Instant> {
        *self.last_update.read().await
    }

    /// Install a new live snapshot, replacing the previous cycle's set
    /// wholesale, and mark the refresh as succeeded.
    pub async fn apply_live(&self, arrivals: Vec<Arrival>) {
        *self.live.write().await = Arc::new(arrivals);
        *self.last_update.write().await = Some(Instant::now());
    }

    /// Next arrivals at a stop, evaluated against the current clock.
    ///
    /// See [`Engine::get_next_at`].
    pub async fn get_next(
        &self,
        line_prefix: &str,
        stop_id: &str,
        include_live: bool,
        count: usize,
    ) -> Board {
        self.get_next_at(
            Local::now().naive_local(),
            line_prefix,
            stop_id,
            include_live,
            count,
        )
        .await
    }

    /// Next arrivals at a stop, evaluated against an explicit `now`.
    ///
    /// Scheduled candidates come from the index's query window; live
    /// records then replace matching train numbers or are inserted, past
    /// arrivals are discarded, and up to `count` arrivals per direction
    /// are returned in ascending timestamp order.
    pub async fn get_next_at(
        &self,
        now: NaiveDateTime,
        line_prefix: &str,
        stop_id: &str,
        include_live: bool,
        count: usize,
    ) -> Board {
        let candidates = self
            .index
            .arrivals_for(line_prefix, stop_id, now, &self.config.window);

        if include_live {
            let live = self.live.read().await.clone();
            merge_board(candidates, &live, line_prefix, stop_id, now, count)
        } else {
            merge_board(candidates, &[], line_prefix, stop_id, now, count)
        }
    }

    /// The single next train per direction, live data included.
    pub async fn next_trains(&self, line_prefix: &str, stop_id: &str) -> NextTrains {
        self.next_trains_at(Local::now().naive_local(), line_prefix, stop_id)
            .await
    }

    /// The single next train per direction against an explicit `now`.
    ///
    /// Empty directions yield `None` rather than panicking on a missing
    /// first element.
    pub async fn next_trains_at(
        &self,
        now: NaiveDateTime,
        line_prefix: &str,
        stop_id: &str,
    ) -> NextTrains {
        let mut board = self.get_next_at(now, line_prefix, stop_id, true, 1).await;
        NextTrains {
            inbound: board.inbound.pop(),
            outbound: board.outbound.pop(),
        }
    }

    async fn refresh_loop(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.config.refresh_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.client.fetch_trip_updates().await {
                        Ok(entities) => {
                            let arrivals = live_arrivals(&entities, &self.index);
                            debug!(count = arrivals.len(), "live feed refreshed");
                            self.apply_live(arrivals).await;
                        }
                        // A failed cycle keeps the previous snapshot and
                        // last_update; the next tick retries.
                        Err(e) => warn!("live feed refresh failed: {e}"),
                    }
                }
                _ = shutdown.changed() => {
                    info!("live reconciler stopped");
                    return;
                }
            }
        }
    }
}
