//! Notification inbox reads and read-flag updates.

use super::notification::Notification;
use crate::core::{NotificationId, UserId};
use crate::store::{NotificationStore, StoreError};

/// Failure from an inbox operation.
#[derive(Debug, thiserror::Error)]
pub enum InboxError {
    #[error("notification not found: {0}")]
    NotFound(NotificationId),

    /// Users may only touch their own notifications.
    #[error("{user} is not the recipient of {notification}")]
    NotRecipient {
        user: UserId,
        notification: NotificationId,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A user's view of their notifications.
pub struct Inbox<'a> {
    store: &'a dyn NotificationStore,
}

impl<'a> Inbox<'a> {
    #[must_use]
    pub fn new(store: &'a dyn NotificationStore) -> Self {
        Self { store }
    }

    /// All notifications for a user, newest first.
    pub fn list(&self, user: UserId) -> Result<Vec<Notification>, InboxError> {
        let mut notifications = self.store.find_for_user(user)?;
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    /// Number of unread notifications.
    pub fn unread_count(&self, user: UserId) -> Result<usize, InboxError> {
        Ok(self
            .store
            .find_for_user(user)?
            .iter()
            .filter(|n| !n.read)
            .count())
    }

    /// Mark one notification read. Marking an already-read notification is
    /// a no-op.
    pub fn mark_read(&self, user: UserId, id: NotificationId) -> Result<(), InboxError> {
        let mut notification = self
            .store
            .find(id)?
            .ok_or(InboxError::NotFound(id))?;
        if notification.recipient != user {
            return Err(InboxError::NotRecipient { user, notification: id });
        }
        if notification.read {
            return Ok(());
        }
        notification.read = true;
        self.store.update(id, notification)?;
        Ok(())
    }

    /// Mark every unread notification for a user as read. Returns how many
    /// were flipped.
    pub fn mark_all_read(&self, user: UserId) -> Result<usize, InboxError> {
        let mut flipped = 0;
        for mut notification in self.store.find_for_user(user)? {
            if !notification.read {
                let id = notification.id;
                notification.read = true;
                self.store.update(id, notification)?;
                flipped += 1;
            }
        }
        Ok(flipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardCatalog;
    use crate::core::{DeckId, TargetRef};
    use crate::notify::NotificationKind;
    use crate::store::MemoryStores;

    fn seed(stores: &MemoryStores, recipient: UserId) -> NotificationId {
        let id = stores.allocate_id().unwrap();
        stores
            .create(Notification::new(
                id,
                NotificationKind::Like,
                "liked your deck",
                TargetRef::Deck(DeckId::new(1)),
                recipient,
                Some(UserId::new(99)),
            ))
            .unwrap();
        id
    }

    #[test]
    fn test_unread_count_and_mark_read() {
        let stores = MemoryStores::new(CardCatalog::new());
        let inbox = Inbox::new(&stores);
        let user = UserId::new(1);

        let first = seed(&stores, user);
        seed(&stores, user);
        assert_eq!(inbox.unread_count(user).unwrap(), 2);

        inbox.mark_read(user, first).unwrap();
        assert_eq!(inbox.unread_count(user).unwrap(), 1);

        // repeat is a no-op
        inbox.mark_read(user, first).unwrap();
        assert_eq!(inbox.unread_count(user).unwrap(), 1);
    }

    #[test]
    fn test_mark_all_read() {
        let stores = MemoryStores::new(CardCatalog::new());
        let inbox = Inbox::new(&stores);
        let user = UserId::new(1);

        seed(&stores, user);
        seed(&stores, user);
        seed(&stores, UserId::new(2));

        assert_eq!(inbox.mark_all_read(user).unwrap(), 2);
        assert_eq!(inbox.unread_count(user).unwrap(), 0);
        assert_eq!(inbox.unread_count(UserId::new(2)).unwrap(), 1);
    }

    #[test]
    fn test_cannot_read_someone_elses_notification() {
        let stores = MemoryStores::new(CardCatalog::new());
        let inbox = Inbox::new(&stores);

        let id = seed(&stores, UserId::new(1));
        assert!(matches!(
            inbox.mark_read(UserId::new(2), id),
            Err(InboxError::NotRecipient { .. })
        ));
    }
}
