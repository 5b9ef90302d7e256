use std::sync::mpsc::Receiver;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::intent::FeedIntent;
use super::reducer::FeedReducer;
use super::state::{FeedPhase, FeedState};
use crate::config::FeedConfig;
use crate::events::{FeedEvent, FeedListener, OutputChannel};
use crate::fetch::{FeedFetcher, FetchError, SourceFetcher};
use crate::ledger::ReactionLedger;
use crate::model::{LookId, ReactionKind, RenderModel};
use crate::mvi::Reducer;
use crate::resources::ResourceResolver;
use crate::store::ContentStore;

/// Content and lifecycle state, guarded together so a reader never sees
/// a replaced store with a stale phase.
#[derive(Default)]
struct Snapshot {
    store: ContentStore,
    state: FeedState,
}

impl Snapshot {
    fn apply(&mut self, intent: FeedIntent) {
        self.state = FeedReducer::reduce(self.state.clone(), intent);
    }
}

struct EngineInner<F> {
    fetcher: F,
    resolver: ResourceResolver,
    snapshot: RwLock<Snapshot>,
    ledger: ReactionLedger,
    output: OutputChannel,
}

/// Orchestrates fetching, reaction counting and render model derivation.
///
/// Cheap to clone; clones share state. Separate `FeedEngine::new` calls
/// produce fully independent engines.
pub struct FeedEngine<F> {
    inner: Arc<EngineInner<F>>,
    runtime: Handle,
}

impl<F> Clone for FeedEngine<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            runtime: self.runtime.clone(),
        }
    }
}

impl FeedEngine<SourceFetcher> {
    /// Build an engine reading from the configured source.
    pub fn from_config(config: &FeedConfig, runtime: Handle) -> Result<Self, FetchError> {
        let fetcher = SourceFetcher::from_config(config)?;
        let resolver = ResourceResolver::from_config(&config.assets);
        Ok(Self::with_resolver(fetcher, resolver, runtime))
    }
}

impl<F: FeedFetcher> FeedEngine<F> {
    pub fn new(fetcher: F, runtime: Handle) -> Self {
        Self::with_resolver(fetcher, ResourceResolver::default(), runtime)
    }

    pub fn with_resolver(fetcher: F, resolver: ResourceResolver, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                fetcher,
                resolver,
                snapshot: RwLock::new(Snapshot::default()),
                ledger: ReactionLedger::new(),
                output: OutputChannel::new(),
            }),
            runtime,
        }
    }

    /// Start a fetch in the background.
    ///
    /// Calls are never coalesced or cancelled: overlapping fetches all run
    /// to completion and the last one to finish determines the content and
    /// phase. The outcome is reported through the listener.
    pub fn fetch_data(&self) -> JoinHandle<()> {
        let engine = self.clone();
        self.runtime.spawn(async move {
            // Outcome already delivered as an event.
            let _ = engine.refresh().await;
        })
    }

    /// Run one fetch to completion and apply its result.
    ///
    /// On success the store is replaced and `FetchCompleted` emitted; on
    /// failure the store is left as it was and `FetchFailed` emitted. The
    /// event fires only after the snapshot update is visible to readers.
    pub async fn refresh(&self) -> Result<usize, FetchError> {
        let pending = {
            let mut snapshot = self.inner.snapshot.write();
            snapshot.apply(FeedIntent::FetchStarted);
            snapshot.state.pending
        };
        tracing::debug!(pending, "Fetch started");

        match self.inner.fetcher.fetch().await {
            Ok(looks) => {
                let items = looks.len();
                {
                    let mut snapshot = self.inner.snapshot.write();
                    snapshot.store.replace(looks);
                    snapshot.apply(FeedIntent::FetchSucceeded);
                }
                tracing::info!(items, "Fetch completed");
                self.inner.output.emit(FeedEvent::FetchCompleted { items });
                Ok(items)
            }
            Err(err) => {
                self.inner.snapshot.write().apply(FeedIntent::FetchFailed);
                tracing::warn!(
                    kind = %err.kind(),
                    status = ?err.status_code(),
                    error = %err,
                    "Fetch failed"
                );
                self.inner.output.emit(FeedEvent::FetchFailed {
                    kind: err.kind(),
                    status: err.status_code(),
                });
                Err(err)
            }
        }
    }
}

impl<F> FeedEngine<F> {
    pub fn number_of_items(&self) -> usize {
        self.inner.snapshot.read().store.count()
    }

    pub fn id_at(&self, index: usize) -> Option<LookId> {
        self.inner.snapshot.read().store.id_at(index)
    }

    /// Render-ready view of the look at `index` with its current counts.
    pub fn render_model_at(&self, index: usize) -> Option<RenderModel> {
        let snapshot = self.inner.snapshot.read();
        let look = snapshot.store.get(index)?;
        let (left_count, right_count) = self.inner.ledger.counts_for(look.id);

        Some(RenderModel {
            id: look.id,
            left_count,
            right_count,
            video_resource: self.inner.resolver.video(&look.compressed_video_url),
            profile_resource: self.inner.resolver.image(&look.profile_picture_url),
            title: look.body.clone(),
        })
    }

    /// Record one reaction and emit `ReactionChanged` with the new count.
    ///
    /// `id` need not belong to a loaded look.
    pub fn react(&self, kind: ReactionKind, id: LookId) -> u64 {
        let count = self.inner.ledger.increment(id, kind);
        tracing::debug!(%kind, id, count, "Reaction recorded");
        self.inner
            .output
            .emit(FeedEvent::ReactionChanged { kind, id, count });
        count
    }

    pub fn count_of(&self, id: LookId, kind: ReactionKind) -> u64 {
        self.inner.ledger.count_of(id, kind)
    }

    pub fn phase(&self) -> FeedPhase {
        self.inner.snapshot.read().state.phase
    }

    pub fn pending_fetches(&self) -> u32 {
        self.inner.snapshot.read().state.pending
    }

    pub fn set_listener(&self, listener: impl FeedListener) {
        self.inner.output.set_listener(listener);
    }

    pub fn clear_listener(&self) {
        self.inner.output.clear_listener();
    }

    /// Route events into a channel, replacing any current listener.
    pub fn subscribe(&self) -> Receiver<FeedEvent> {
        self.inner.output.subscribe()
    }
}
