//! Feed data model: looks as received from the backend, reaction kinds,
//! and the render-ready projection handed to the presentation layer.

mod look;
mod reaction;
mod render;

pub use look::{Look, LookId, LooksPayload};
pub use reaction::ReactionKind;
pub use render::RenderModel;
