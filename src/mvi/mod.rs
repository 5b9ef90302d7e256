//! Model-View-Intent primitives used by the feed engine.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ listener
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of engine state
//! - **Intent**: a request lifecycle event
//! - **Reducer**: pure function from (State, Intent) to State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
