//! Feed state and reaction counting for a vertically paged video feed.
//!
//! The presentation layer drives a [`FeedEngine`](engine::FeedEngine):
//! it triggers fetches, asks for render models by index, records
//! reactions, and listens for [`FeedEvent`](events::FeedEvent)s.

pub mod config;
pub mod engine;
pub mod events;
pub mod fetch;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod resources;
pub mod store;
