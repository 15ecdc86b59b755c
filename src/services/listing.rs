//! Page controller for the cafe listing: initial load, debounced search and
//! rendering into the cafes container.
//!
//! Every fetch takes a generation number when it is dispatched. A response is
//! rendered only if no newer fetch has been dispatched since, so a slow
//! response can never overwrite the result of a later request. Fetch failures
//! are logged and leave whatever the container already shows.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, error};

use crate::constants::intervals;
use crate::error::ClientError;
use crate::models::{Listing, SearchQuery, Viewer};
use crate::page::{Container, SearchBox};
use crate::render::render_into;
use crate::services::{CafeSource, Debouncer};

const RENDER_EVENT_BUFFER: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    InitialLoad,
    Search(SearchQuery),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Cafes(usize),
    NotFound,
}

/// Sent after each render pass that reached the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEvent {
    pub generation: u64,
    pub trigger: Trigger,
    pub outcome: RenderOutcome,
}

struct Inner {
    source: Arc<dyn CafeSource>,
    viewer: Viewer,
    container: RwLock<Container>,
    issued: AtomicU64,
    debouncer: Debouncer,
    renders: broadcast::Sender<RenderEvent>,
}

#[derive(Clone)]
pub struct ListingController {
    inner: Arc<Inner>,
}

impl ListingController {
    #[must_use]
    pub fn new(source: Arc<dyn CafeSource>, viewer: Viewer) -> Self {
        Self::with_debounce(source, viewer, intervals::SEARCH_DEBOUNCE)
    }

    #[must_use]
    pub fn with_debounce(source: Arc<dyn CafeSource>, viewer: Viewer, delay: Duration) -> Self {
        let (renders, _) = broadcast::channel(RENDER_EVENT_BUFFER);

        Self {
            inner: Arc::new(Inner {
                source,
                viewer,
                container: RwLock::new(Container::default()),
                issued: AtomicU64::new(0),
                debouncer: Debouncer::new(delay),
                renders,
            }),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RenderEvent> {
        self.inner.renders.subscribe()
    }

    /// Snapshot of the container as last rendered.
    pub async fn container(&self) -> Container {
        self.inner.container.read().await.clone()
    }

    /// Fetches the whole collection and renders it. Returns whether the
    /// container was updated.
    pub async fn load_all(&self) -> bool {
        let generation = self.next_generation();
        debug!(generation, "Loading all cafes");

        let result = self.inner.source.fetch_all().await;
        self.apply(generation, Trigger::InitialLoad, result).await
    }

    /// Input handler for the search box. The search itself runs once the
    /// debounce period has passed without further input.
    pub fn on_search_input(&self, search_box: &SearchBox) {
        let controller = self.clone();
        let query = search_box.query();

        self.inner.debouncer.call(async move {
            controller.search(query).await;
        });
    }

    /// Runs one search immediately, bypassing the debounce.
    pub async fn search(&self, query: SearchQuery) -> bool {
        let generation = self.next_generation();
        debug!(generation, path = %query.path(), "Searching cafes");

        let result = self.inner.source.search(&query).await;
        self.apply(generation, Trigger::Search(query), result).await
    }

    fn next_generation(&self) -> u64 {
        self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.inner.issued.load(Ordering::SeqCst) == generation
    }

    async fn apply(
        &self,
        generation: u64,
        trigger: Trigger,
        result: Result<Listing, ClientError>,
    ) -> bool {
        let listing = match result {
            Ok(listing) => listing,
            Err(e) => {
                error!(error = %e, ?trigger, "Error fetching data");
                return false;
            }
        };

        let mut container = self.inner.container.write().await;

        if !self.is_latest(generation) {
            debug!(generation, ?trigger, "Dropping stale cafe list");
            return false;
        }

        render_into(&mut container, &listing, self.inner.viewer);
        drop(container);

        let outcome = match &listing {
            Listing::Cafes(cafes) => RenderOutcome::Cafes(cafes.len()),
            Listing::NotFound(_) => RenderOutcome::NotFound,
        };

        // Nobody listening is fine.
        let _ = self.inner.renders.send(RenderEvent {
            generation,
            trigger,
            outcome,
        });

        true
    }
}
