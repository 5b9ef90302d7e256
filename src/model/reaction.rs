use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two reactions a viewer can leave on a look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    /// Left-hand reaction (right swipe).
    Heart,
    /// Right-hand reaction (left swipe).
    Fire,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 2] = [ReactionKind::Heart, ReactionKind::Fire];

    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Heart => "heart",
            ReactionKind::Fire => "fire",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heart" => Ok(ReactionKind::Heart),
            "fire" => Ok(ReactionKind::Fire),
            other => Err(format!("unknown reaction '{}', expected heart or fire", other)),
        }
    }
}
