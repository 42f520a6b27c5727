//! Persistence collaborator boundary.
//!
//! One trait per entity store, each with atomic single-record semantics. No
//! multi-record transactions are assumed anywhere in the core: a deck save
//! is one `create` or `update`, and a failed write leaves the previously
//! persisted record untouched.
//!
//! Stores are injected into the services as `&dyn` collaborators rather
//! than reached through module globals. `MemoryStores` is the in-process
//! implementation used by the test suite.

pub mod memory;

pub use memory::MemoryStores;

use crate::comments::Comment;
use crate::core::{CommentId, DeckId, NotificationId, TargetRef, User, UserId};
use crate::deck::Deck;
use crate::notify::Notification;

/// Infrastructure failure from a store, kept distinct from business-rule
/// failures: callers retry or surface a generic error, never interpret it
/// as invalid input.
#[derive(Clone, Debug, thiserror::Error)]
pub enum StoreError {
    /// The record a mutation targeted does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    /// The backend itself failed.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Deck records.
pub trait DeckStore {
    /// Reserve a fresh deck ID.
    fn allocate_id(&self) -> Result<DeckId, StoreError>;

    fn find(&self, id: DeckId) -> Result<Option<Deck>, StoreError>;

    /// All public decks, unordered.
    fn list_public(&self) -> Result<Vec<Deck>, StoreError>;

    /// Insert a new record under `deck.id`.
    fn create(&self, deck: Deck) -> Result<(), StoreError>;

    /// Replace the record; `NotFound` if it does not exist.
    fn update(&self, id: DeckId, deck: Deck) -> Result<(), StoreError>;

    fn delete(&self, id: DeckId) -> Result<(), StoreError>;
}

/// User records. Accounts are created upstream; the core reads profiles and
/// writes the favorites set.
pub trait UserStore {
    fn find(&self, id: UserId) -> Result<Option<User>, StoreError>;

    fn create(&self, user: User) -> Result<(), StoreError>;

    fn update(&self, id: UserId, user: User) -> Result<(), StoreError>;
}

/// Comment records.
pub trait CommentStore {
    fn allocate_id(&self) -> Result<CommentId, StoreError>;

    fn find(&self, id: CommentId) -> Result<Option<Comment>, StoreError>;

    /// Every comment on a target, in no particular order.
    fn find_for_target(&self, target: TargetRef) -> Result<Vec<Comment>, StoreError>;

    fn create(&self, comment: Comment) -> Result<(), StoreError>;

    fn update(&self, id: CommentId, comment: Comment) -> Result<(), StoreError>;

    fn delete(&self, id: CommentId) -> Result<(), StoreError>;
}

/// Notification records.
pub trait NotificationStore {
    fn allocate_id(&self) -> Result<NotificationId, StoreError>;

    fn find(&self, id: NotificationId) -> Result<Option<Notification>, StoreError>;

    /// Every notification addressed to a user, in no particular order.
    fn find_for_user(&self, user: UserId) -> Result<Vec<Notification>, StoreError>;

    fn create(&self, notification: Notification) -> Result<(), StoreError>;

    fn update(&self, id: NotificationId, notification: Notification) -> Result<(), StoreError>;

    fn delete(&self, id: NotificationId) -> Result<(), StoreError>;
}

/// Resolves the owning user of an engagement or comment target.
///
/// Catalog cards have no owner; decks are owned by their creator; event and
/// post ownership comes from their respective stores. A missing target is a
/// `NotFound` error, distinct from an existing-but-unowned target (`None`).
pub trait OwnerResolver {
    fn owner_of(&self, target: TargetRef) -> Result<Option<UserId>, StoreError>;
}
