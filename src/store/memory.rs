//! In-memory store implementation.
//!
//! Backs every store trait with an `FxHashMap` behind an `RwLock`, with
//! atomic counters for ID allocation. Used by the test suite and by
//! embedders that do not need durable storage. Lock poisoning surfaces as
//! `StoreError::Backend`, the same way a real backend failure would.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;

use super::{
    CommentStore, DeckStore, NotificationStore, OwnerResolver, StoreError, UserStore,
};
use crate::catalog::CardCatalog;
use crate::comments::Comment;
use crate::core::{
    CommentId, DeckId, EventId, NotificationId, PostId, TargetRef, User, UserId,
};
use crate::deck::Deck;
use crate::notify::Notification;

/// All stores, in one process-local bundle.
#[derive(Debug, Default)]
pub struct MemoryStores {
    catalog: CardCatalog,
    decks: RwLock<FxHashMap<DeckId, Deck>>,
    users: RwLock<FxHashMap<UserId, User>>,
    comments: RwLock<FxHashMap<CommentId, Comment>>,
    notifications: RwLock<FxHashMap<NotificationId, Notification>>,
    event_owners: RwLock<FxHashMap<EventId, UserId>>,
    post_owners: RwLock<FxHashMap<PostId, UserId>>,
    next_deck_id: AtomicU32,
    next_comment_id: AtomicU32,
    next_notification_id: AtomicU32,
}

fn read_guard<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read()
        .map_err(|_| StoreError::Backend("poisoned lock".into()))
}

fn write_guard<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write()
        .map_err(|_| StoreError::Backend("poisoned lock".into()))
}

fn next_id(counter: &AtomicU32) -> u32 {
    counter.fetch_add(1, Ordering::Relaxed) + 1
}

impl MemoryStores {
    /// Create empty stores over the given catalog.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// The card catalog backing these stores.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Record the owner of an event so it can be commented on.
    pub fn set_event_owner(&self, event: EventId, owner: UserId) -> Result<(), StoreError> {
        write_guard(&self.event_owners)?.insert(event, owner);
        Ok(())
    }

    /// Record the owner of a post so it can be commented on.
    pub fn set_post_owner(&self, post: PostId, owner: UserId) -> Result<(), StoreError> {
        write_guard(&self.post_owners)?.insert(post, owner);
        Ok(())
    }
}

impl DeckStore for MemoryStores {
    fn allocate_id(&self) -> Result<DeckId, StoreError> {
        Ok(DeckId::new(next_id(&self.next_deck_id)))
    }

    fn find(&self, id: DeckId) -> Result<Option<Deck>, StoreError> {
        Ok(read_guard(&self.decks)?.get(&id).cloned())
    }

    fn list_public(&self) -> Result<Vec<Deck>, StoreError> {
        Ok(read_guard(&self.decks)?
            .values()
            .filter(|d| d.is_public)
            .cloned()
            .collect())
    }

    fn create(&self, deck: Deck) -> Result<(), StoreError> {
        write_guard(&self.decks)?.insert(deck.id, deck);
        Ok(())
    }

    fn update(&self, id: DeckId, deck: Deck) -> Result<(), StoreError> {
        let mut decks = write_guard(&self.decks)?;
        if !decks.contains_key(&id) {
            return Err(StoreError::NotFound { entity: "deck", id: id.raw() });
        }
        decks.insert(id, deck);
        Ok(())
    }

    fn delete(&self, id: DeckId) -> Result<(), StoreError> {
        write_guard(&self.decks)?
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "deck", id: id.raw() })
    }
}

impl UserStore for MemoryStores {
    fn find(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(read_guard(&self.users)?.get(&id).cloned())
    }

    fn create(&self, user: User) -> Result<(), StoreError> {
        write_guard(&self.users)?.insert(user.id, user);
        Ok(())
    }

    fn update(&self, id: UserId, user: User) -> Result<(), StoreError> {
        let mut users = write_guard(&self.users)?;
        if !users.contains_key(&id) {
            return Err(StoreError::NotFound { entity: "user", id: id.raw() });
        }
        users.insert(id, user);
        Ok(())
    }
}

impl CommentStore for MemoryStores {
    fn allocate_id(&self) -> Result<CommentId, StoreError> {
        Ok(CommentId::new(next_id(&self.next_comment_id)))
    }

    fn find(&self, id: CommentId) -> Result<Option<Comment>, StoreError> {
        Ok(read_guard(&self.comments)?.get(&id).cloned())
    }

    fn find_for_target(&self, target: TargetRef) -> Result<Vec<Comment>, StoreError> {
        Ok(read_guard(&self.comments)?
            .values()
            .filter(|c| c.target == target)
            .cloned()
            .collect())
    }

    fn create(&self, comment: Comment) -> Result<(), StoreError> {
        write_guard(&self.comments)?.insert(comment.id, comment);
        Ok(())
    }

    fn update(&self, id: CommentId, comment: Comment) -> Result<(), StoreError> {
        let mut comments = write_guard(&self.comments)?;
        if !comments.contains_key(&id) {
            return Err(StoreError::NotFound { entity: "comment", id: id.raw() });
        }
        comments.insert(id, comment);
        Ok(())
    }

    fn delete(&self, id: CommentId) -> Result<(), StoreError> {
        write_guard(&self.comments)?
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "comment", id: id.raw() })
    }
}

impl NotificationStore for MemoryStores {
    fn allocate_id(&self) -> Result<NotificationId, StoreError> {
        Ok(NotificationId::new(next_id(&self.next_notification_id)))
    }

    fn find(&self, id: NotificationId) -> Result<Option<Notification>, StoreError> {
        Ok(read_guard(&self.notifications)?.get(&id).cloned())
    }

    fn find_for_user(&self, user: UserId) -> Result<Vec<Notification>, StoreError> {
        Ok(read_guard(&self.notifications)?
            .values()
            .filter(|n| n.recipient == user)
            .cloned()
            .collect())
    }

    fn create(&self, notification: Notification) -> Result<(), StoreError> {
        write_guard(&self.notifications)?.insert(notification.id, notification);
        Ok(())
    }

    fn update(&self, id: NotificationId, notification: Notification) -> Result<(), StoreError> {
        let mut notifications = write_guard(&self.notifications)?;
        if !notifications.contains_key(&id) {
            return Err(StoreError::NotFound { entity: "notification", id: id.raw() });
        }
        notifications.insert(id, notification);
        Ok(())
    }

    fn delete(&self, id: NotificationId) -> Result<(), StoreError> {
        write_guard(&self.notifications)?
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "notification", id: id.raw() })
    }
}

impl OwnerResolver for MemoryStores {
    fn owner_of(&self, target: TargetRef) -> Result<Option<UserId>, StoreError> {
        match target {
            TargetRef::Deck(id) => read_guard(&self.decks)?
                .get(&id)
                .map(|d| Some(d.creator))
                .ok_or(StoreError::NotFound { entity: "deck", id: id.raw() }),
            // Catalog cards exist but are owned by no one.
            TargetRef::Card(id) => {
                if self.catalog.contains(id) {
                    Ok(None)
                } else {
                    Err(StoreError::NotFound { entity: "card", id: id.raw() })
                }
            }
            TargetRef::Event(id) => read_guard(&self.event_owners)?
                .get(&id)
                .map(|&owner| Some(owner))
                .ok_or(StoreError::NotFound { entity: "event", id: id.raw() }),
            TargetRef::Post(id) => read_guard(&self.post_owners)?
                .get(&id)
                .map(|&owner| Some(owner))
                .ok_or(StoreError::NotFound { entity: "post", id: id.raw() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Card;
    use crate::core::{CardId, EnergyType};
    use crate::deck::DeckBuilder;

    fn stores() -> MemoryStores {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Card 1", "Card 1", EnergyType::Fire));
        MemoryStores::new(catalog)
    }

    fn sample_deck(stores: &MemoryStores, creator: UserId) -> Deck {
        let mut builder = DeckBuilder::new("Sample").main_energy(EnergyType::Fire);
        for _ in 0..4 {
            builder.add_card(CardId::new(1)).unwrap();
        }
        for _ in 0..56 {
            builder.add_energy(EnergyType::Fire).unwrap();
        }
        let id = DeckStore::allocate_id(stores).unwrap();
        builder.finalize(stores.catalog(), id, creator).unwrap()
    }

    #[test]
    fn test_deck_crud() {
        let stores = stores();
        let deck = sample_deck(&stores, UserId::new(1));
        let id = deck.id;

        DeckStore::create(&stores, deck).unwrap();
        assert!(DeckStore::find(&stores, id).unwrap().is_some());

        DeckStore::delete(&stores, id).unwrap();
        assert!(DeckStore::find(&stores, id).unwrap().is_none());
        assert!(matches!(
            DeckStore::delete(&stores, id),
            Err(StoreError::NotFound { entity: "deck", .. })
        ));
    }

    #[test]
    fn test_allocated_ids_are_unique() {
        let stores = stores();
        let a = DeckStore::allocate_id(&stores).unwrap();
        let b = DeckStore::allocate_id(&stores).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_missing_deck_is_not_found() {
        let stores = stores();
        let deck = sample_deck(&stores, UserId::new(1));
        assert!(matches!(
            DeckStore::update(&stores, DeckId::new(99), deck),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_public_filters_private() {
        let stores = stores();
        let mut public = sample_deck(&stores, UserId::new(1));
        public.is_public = true;
        let mut private = sample_deck(&stores, UserId::new(1));
        private.is_public = false;

        DeckStore::create(&stores, public).unwrap();
        DeckStore::create(&stores, private).unwrap();
        assert_eq!(stores.list_public().unwrap().len(), 1);
    }

    #[test]
    fn test_owner_resolution() {
        let stores = stores();
        let deck = sample_deck(&stores, UserId::new(42));
        let deck_id = deck.id;
        DeckStore::create(&stores, deck).unwrap();

        assert_eq!(
            stores.owner_of(TargetRef::Deck(deck_id)).unwrap(),
            Some(UserId::new(42))
        );
        // Cards exist but have no owner.
        assert_eq!(stores.owner_of(TargetRef::Card(CardId::new(1))).unwrap(), None);
        // Missing targets are NotFound, not unowned.
        assert!(stores.owner_of(TargetRef::Deck(DeckId::new(99))).is_err());
        assert!(stores.owner_of(TargetRef::Card(CardId::new(99))).is_err());

        stores.set_event_owner(EventId::new(1), UserId::new(3)).unwrap();
        assert_eq!(
            stores.owner_of(TargetRef::Event(EventId::new(1))).unwrap(),
            Some(UserId::new(3))
        );
    }
}
