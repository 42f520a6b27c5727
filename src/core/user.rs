//! User profile data the core needs.
//!
//! Account creation and credential handling happen upstream; the core only
//! reads the public profile (username, avatar) and mutates the favorite-card
//! set. The favorites set uses `im::HashSet` so membership operations are
//! structural and a snapshot clone is O(1).

use chrono::{DateTime, Utc};
use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use super::id::{CardId, UserId};

/// A user account, reduced to the fields the core reads and writes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the identity layer.
    pub id: UserId,

    /// Public username.
    pub username: String,

    /// Avatar image URL, if the user set one.
    pub avatar_url: Option<String>,

    /// Administrators may delete any deck or comment.
    pub is_admin: bool,

    /// Cards this user has favorited. Set membership, not an append log.
    pub favorite_cards: ImHashSet<CardId>,

    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a profile with no avatar, no favorites, and no admin rights.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            avatar_url: None,
            is_admin: false,
            favorite_cards: ImHashSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Mark this user as an administrator (builder pattern).
    #[must_use]
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// Set the avatar URL (builder pattern).
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Check whether this user has favorited a card.
    #[must_use]
    pub fn has_favorited(&self, card: CardId) -> bool {
        self.favorite_cards.contains(&card)
    }
}
