/// Marker trait for intents processed by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
