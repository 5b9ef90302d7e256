//! Feed state engine: fetch lifecycle, content, reactions and output events.

mod feed;
mod intent;
mod reducer;
mod state;

pub use feed::FeedEngine;
pub use intent::FeedIntent;
pub use reducer::FeedReducer;
pub use state::{FeedPhase, FeedState};
