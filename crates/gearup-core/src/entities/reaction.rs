//! Reaction entity - one viewer's like/dislike on a post
//!
//! Holds the per-viewer toggle state machine: a viewer is in one of
//! {none, liked, disliked} per post, and every like/dislike action moves
//! between those states with a deterministic count adjustment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::ViewerKey;

/// Kind of reaction a viewer can leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Lowercase storage form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = UnknownReactionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(UnknownReactionKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for parsing a reaction kind from API input
#[derive(Debug, thiserror::Error)]
#[error("Unknown reaction kind: {0}")]
pub struct UnknownReactionKind(pub String);

/// Reaction entity - at most one per (post, viewer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: Uuid,
    pub viewer_key: ViewerKey,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(post_id: Uuid, viewer_key: ViewerKey, kind: ReactionKind) -> Self {
        Self {
            post_id,
            viewer_key,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// The viewer's standing toward a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerReaction {
    #[default]
    None,
    Liked,
    Disliked,
}

impl ViewerReaction {
    /// Lift a stored reaction kind into a viewer state
    #[must_use]
    pub fn from_kind(kind: Option<ReactionKind>) -> Self {
        match kind {
            None => Self::None,
            Some(ReactionKind::Like) => Self::Liked,
            Some(ReactionKind::Dislike) => Self::Disliked,
        }
    }

    /// The stored kind backing this state, if any
    #[must_use]
    pub fn kind(&self) -> Option<ReactionKind> {
        match self {
            Self::None => None,
            Self::Liked => Some(ReactionKind::Like),
            Self::Disliked => Some(ReactionKind::Dislike),
        }
    }

    /// Apply a like/dislike action to the current state.
    ///
    /// Repeating the current reaction removes it; the opposite reaction
    /// switches it; anything from `None` adds it.
    #[must_use]
    pub fn apply(self, action: ReactionKind) -> ReactionTransition {
        let next = match (self, action) {
            (Self::Liked, ReactionKind::Like) | (Self::Disliked, ReactionKind::Dislike) => {
                Self::None
            }
            (_, ReactionKind::Like) => Self::Liked,
            (_, ReactionKind::Dislike) => Self::Disliked,
        };

        let likes_delta = delta(self == Self::Liked, next == Self::Liked);
        let dislikes_delta = delta(self == Self::Disliked, next == Self::Disliked);

        ReactionTransition {
            previous: self,
            next,
            likes_delta,
            dislikes_delta,
        }
    }
}

fn delta(was: bool, is: bool) -> i64 {
    i64::from(is) - i64::from(was)
}

/// Outcome of one toggle step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    pub previous: ViewerReaction,
    pub next: ViewerReaction,
    pub likes_delta: i64,
    pub dislikes_delta: i64,
}

impl ReactionTransition {
    /// Whether the step removed the viewer's reaction entirely
    #[inline]
    pub fn removed(&self) -> bool {
        self.next == ViewerReaction::None
    }

    /// Whether the step switched between like and dislike
    #[inline]
    pub fn switched(&self) -> bool {
        self.previous != ViewerReaction::None && self.next != ViewerReaction::None
    }
}

/// Aggregate reaction state for one post as seen by one viewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionState {
    pub likes: i64,
    pub dislikes: i64,
    pub viewer_reaction: ViewerReaction,
}

impl ReactionState {
    /// Create a new ReactionState
    pub fn new(likes: i64, dislikes: i64, viewer_reaction: ViewerReaction) -> Self {
        Self {
            likes,
            dislikes,
            viewer_reaction,
        }
    }
}
