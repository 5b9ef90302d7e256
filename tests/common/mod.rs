//! Shared test utilities and a scripted fetcher.

#![allow(dead_code)]

pub mod mock_backend;

use looks_feed::fetch::{FeedFetcher, FetchError};
use looks_feed::model::{Look, LookId, LooksPayload};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn look(id: LookId) -> Look {
    Look {
        id,
        body: format!("Look number {}", id),
        profile_picture_url: format!("profile_{}", id),
        compressed_video_url: format!("video_{}", id),
        song_url: format!("song_{}.mp3", id),
        username: format!("user_{}", id),
    }
}

pub fn looks(ids: &[LookId]) -> Vec<Look> {
    ids.iter().copied().map(look).collect()
}

/// JSON document in wire format for the given ids.
pub fn payload_json(ids: &[LookId]) -> String {
    serde_json::to_string(&LooksPayload { looks: looks(ids) }).unwrap()
}

pub fn transport_error(status: u16) -> FetchError {
    FetchError::Transport {
        status: Some(status),
        message: "scripted failure".to_string(),
    }
}

struct Step {
    result: Result<Vec<Look>, FetchError>,
    delay: Duration,
}

/// Fetcher that replays a queue of canned results.
///
/// An exhausted script fails with a transport error.
#[derive(Default)]
pub struct ScriptedFetcher {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(self, ids: &[LookId]) -> Self {
        self.push(Ok(looks(ids)), Duration::ZERO)
    }

    pub fn succeed_after(self, ids: &[LookId], delay: Duration) -> Self {
        self.push(Ok(looks(ids)), delay)
    }

    pub fn fail(self, status: u16) -> Self {
        self.push(Err(transport_error(status)), Duration::ZERO)
    }

    pub fn fail_after(self, status: u16, delay: Duration) -> Self {
        self.push(Err(transport_error(status)), delay)
    }

    fn push(self, result: Result<Vec<Look>, FetchError>, delay: Duration) -> Self {
        self.steps.lock().push_back(Step { result, delay });
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FeedFetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<Vec<Look>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.steps.lock().pop_front();
        let Some(step) = next else {
            return Err(FetchError::Transport {
                status: None,
                message: "script exhausted".to_string(),
            });
        };

        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        step.result
    }
}
