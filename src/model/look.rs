use serde::{Deserialize, Serialize};

/// Identifier of a look, unique within one fetched batch.
pub type LookId = i64;

/// One feed entry. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Look {
    pub id: LookId,
    /// Caption shown over the video.
    pub body: String,
    pub profile_picture_url: String,
    #[serde(rename = "compressed_for_ios_url")]
    pub compressed_video_url: String,
    /// Carried through, not read by the feed logic.
    pub song_url: String,
    /// Carried through, not read by the feed logic.
    pub username: String,
}

/// Wire envelope: `{ "looks": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LooksPayload {
    pub looks: Vec<Look>,
}
