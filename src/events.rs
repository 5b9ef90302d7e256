//! Output events and listener registration.
//!
//! The engine emits an event only after the state change it describes is
//! committed, so a listener reading back from the engine always sees at
//! least that change. Listeners run on whatever thread produced the
//! event; marshaling onto a render thread is the listener's job.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::fetch::FetchErrorKind;
use crate::model::{LookId, ReactionKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A fetch succeeded and the content store now holds `items` looks.
    FetchCompleted { items: usize },
    /// A fetch failed; previously loaded content is untouched.
    FetchFailed {
        kind: FetchErrorKind,
        status: Option<u16>,
    },
    /// A reaction was recorded; `count` is the new cumulative value.
    ReactionChanged {
        kind: ReactionKind,
        id: LookId,
        count: u64,
    },
}

/// Receives [`FeedEvent`]s from an engine.
pub trait FeedListener: Send + Sync + 'static {
    fn on_event(&self, event: &FeedEvent);
}

impl<F> FeedListener for F
where
    F: Fn(&FeedEvent) + Send + Sync + 'static,
{
    fn on_event(&self, event: &FeedEvent) {
        self(event)
    }
}

/// Holds at most one listener, replaceable at any time.
#[derive(Default)]
pub struct OutputChannel {
    listener: RwLock<Option<Arc<dyn FeedListener>>>,
}

impl OutputChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `listener`, replacing any previous one.
    pub fn set_listener(&self, listener: impl FeedListener) {
        *self.listener.write() = Some(Arc::new(listener));
    }

    pub fn clear_listener(&self) {
        *self.listener.write() = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.read().is_some()
    }

    /// Replace the listener with a channel and return its receiving end.
    ///
    /// Events sent after the receiver is dropped are discarded.
    pub fn subscribe(&self) -> Receiver<FeedEvent> {
        let (tx, rx) = mpsc::channel();
        self.set_listener(move |event: &FeedEvent| {
            let _ = tx.send(event.clone());
        });
        rx
    }

    /// Deliver `event` to the current listener, if any.
    ///
    /// The lock is released before the listener runs, so a listener may
    /// call back into the engine or swap itself out.
    pub fn emit(&self, event: FeedEvent) {
        let listener = self.listener.read().clone();
        match listener {
            Some(listener) => listener.on_event(&event),
            None => tracing::trace!(?event, "No listener registered, event dropped"),
        }
    }
}
