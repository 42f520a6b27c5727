//! The notification record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{NotificationId, TargetRef, UserId};

/// What triggered a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Mention,
    System,
}

impl NotificationKind {
    /// Canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Like => "like",
            NotificationKind::Comment => "comment",
            NotificationKind::Follow => "follow",
            NotificationKind::Mention => "mention",
            NotificationKind::System => "system",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification addressed to one user.
///
/// Created only as a side effect of a cross-user engagement or comment;
/// self-actions never produce one. `message` is informational; the kind,
/// target, recipient, and `triggered_by` fields carry the meaning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier, assigned by the notification store.
    pub id: NotificationId,

    pub kind: NotificationKind,

    /// Human-readable message.
    pub message: String,

    /// The entity the action applied to.
    pub target: TargetRef,

    /// The user being notified (the target's owner).
    pub recipient: UserId,

    /// The acting user, when the kind has one.
    pub triggered_by: Option<UserId>,

    /// Unread until the recipient opens it.
    pub read: bool,

    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an unread notification stamped now.
    #[must_use]
    pub fn new(
        id: NotificationId,
        kind: NotificationKind,
        message: impl Into<String>,
        target: TargetRef,
        recipient: UserId,
        triggered_by: Option<UserId>,
    ) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            target,
            recipient,
            triggered_by,
            read: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeckId;

    #[test]
    fn test_new_notification_starts_unread() {
        let n = Notification::new(
            NotificationId::new(1),
            NotificationKind::Like,
            "liked your deck",
            TargetRef::Deck(DeckId::new(1)),
            UserId::new(1),
            Some(UserId::new(2)),
        );
        assert!(!n.read);
        assert_eq!(n.kind, NotificationKind::Like);
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Comment).unwrap(),
            "\"comment\""
        );
        assert_eq!(NotificationKind::Like.as_str(), "like");
    }
}
