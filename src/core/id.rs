//! Identifier newtypes for platform entities.
//!
//! Every persisted entity (user, card, deck, comment, notification) has its
//! own ID type. Keeping them distinct prevents cross-entity mixups at
//! compile time (a `UserId` can never be passed where a `DeckId` is needed).
//!
//! `TargetRef` names the entity an engagement or comment applies to.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $display:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a new ID from a raw value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw ID value.
            #[must_use]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($display, "({})"), self.0)
            }
        }
    };
}

id_type!(
    /// Unique identifier for a user account.
    UserId,
    "User"
);

id_type!(
    /// Unique identifier for a card in the catalog.
    ///
    /// This identifies the card printing (e.g., "Charizard EX"),
    /// not a copy inside a particular deck.
    CardId,
    "Card"
);

id_type!(
    /// Unique identifier for a user-built deck.
    DeckId,
    "Deck"
);

id_type!(
    /// Unique identifier for a comment.
    CommentId,
    "Comment"
);

id_type!(
    /// Unique identifier for a notification record.
    NotificationId,
    "Notification"
);

id_type!(
    /// Unique identifier for a community event.
    EventId,
    "Event"
);

id_type!(
    /// Unique identifier for a community post.
    PostId,
    "Post"
);

/// The entity an engagement or comment action applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "targetType", content = "targetId", rename_all = "lowercase")]
pub enum TargetRef {
    Deck(DeckId),
    Card(CardId),
    Event(EventId),
    Post(PostId),
}

impl TargetRef {
    /// Human-readable noun for message construction ("deck", "card", ...).
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            TargetRef::Deck(_) => "deck",
            TargetRef::Card(_) => "card",
            TargetRef::Event(_) => "event",
            TargetRef::Post(_) => "post",
        }
    }

    /// Get the raw ID of the referenced entity.
    #[must_use]
    pub const fn raw_id(self) -> u32 {
        match self {
            TargetRef::Deck(id) => id.raw(),
            TargetRef::Card(id) => id.raw(),
            TargetRef::Event(id) => id.raw(),
            TargetRef::Post(id) => id.raw(),
        }
    }
}

impl std::fmt::Display for TargetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.noun(), self.raw_id())
    }
}
