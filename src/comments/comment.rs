//! The comment record and its read-side view.

use chrono::{DateTime, Utc};
use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{CommentId, TargetRef, UserId};

/// A comment on a deck, card, event, or post.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier, assigned by the comment store.
    pub id: CommentId,

    /// The entity this comment is attached to.
    pub target: TargetRef,

    pub author: UserId,

    /// Comment text, non-empty after trimming.
    pub content: String,

    /// Users who liked this comment.
    pub likes: ImHashSet<UserId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment stamped now with no likes.
    #[must_use]
    pub fn new(
        id: CommentId,
        target: TargetRef,
        author: UserId,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            target,
            author,
            content: content.into(),
            likes: ImHashSet::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A comment joined with its author's public profile, for thread listings.
#[derive(Clone, Debug, Serialize)]
pub struct CommentView {
    pub comment: Comment,
    pub author_name: String,
    pub author_avatar: Option<String>,
}
