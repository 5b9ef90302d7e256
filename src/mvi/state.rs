/// Marker trait for reducer-owned state.
///
/// States are cloned rather than mutated and compared to detect changes.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
