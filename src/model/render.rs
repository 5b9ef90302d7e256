use super::look::LookId;

/// Render-ready projection of a look plus its current reaction counts.
///
/// Recomputed on every request; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub id: LookId,
    /// Heart count.
    pub left_count: u64,
    /// Fire count.
    pub right_count: u64,
    pub video_resource: String,
    pub profile_resource: String,
    pub title: String,
}
