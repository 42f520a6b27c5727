//! # tcg-decks
//!
//! Deck building and social engagement core for a trading-card-game
//! content platform.
//!
//! ## Design Principles
//!
//! 1. **Pure core, injected edges**: validation and toggle decisions are
//!    synchronous pure functions; persistence and identity are injected
//!    collaborators, never module globals.
//!
//! 2. **Sets, not counters**: likes and favorites are set membership.
//!    Repeated or racing identical actions converge instead of
//!    double-counting.
//!
//! 3. **All-or-nothing saves**: a deck either passes validation and
//!    replaces the persisted record, or the caller gets the full violation
//!    list and the record is untouched.
//!
//! ## Architecture
//!
//! - **Single-record writes**: no multi-record transactions are assumed of
//!   the persistence layer; every mutation is one `create`/`update`.
//!
//! - **Best-effort notifications**: notification writes ride along with
//!   likes and comments but never fail them.
//!
//! - **Persistent data structures**: likes/favorites sets use `im` for
//!   O(1) snapshot clones and structural membership operations.
//!
//! ## Modules
//!
//! - `core`: ID newtypes, the energy enumeration, user profiles
//! - `catalog`: immutable card reference data and lookup
//! - `deck`: deck aggregate, validator, incremental builder, save service
//! - `engagement`: idempotent like/favorite toggles
//! - `notify`: notification records, emission, inbox reads
//! - `comments`: comment threads and comment-triggered notifications
//! - `store`: persistence traits and the in-memory implementation
//! - `request`: boundary payload schemas

pub mod catalog;
pub mod comments;
pub mod core;
pub mod deck;
pub mod engagement;
pub mod notify;
pub mod request;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    CardId, CommentId, DeckId, EnergyType, EventId, NotificationId, PostId, TargetRef, User,
    UserId,
};

pub use crate::catalog::{Attack, Card, CardCatalog, CardKind, Rarity};

pub use crate::deck::{
    check_composition, BuildError, CardLine, Deck, DeckBuilder, DeckError, DeckService,
    EnergyLine, Violation, DECK_SIZE, MAX_COPIES,
};

pub use crate::engagement::{EngagementError, EngagementService, ToggleAction, ToggleOutcome};

pub use crate::notify::{Inbox, InboxError, Notification, NotificationEmitter, NotificationKind};

pub use crate::comments::{Comment, CommentError, CommentThreads, CommentView};

pub use crate::store::{
    CommentStore, DeckStore, MemoryStores, NotificationStore, OwnerResolver, StoreError,
    UserStore,
};

pub use crate::request::{
    CardSelection, CommentPayload, DeckPayload, EnergySelection, PayloadError, TogglePayload,
};
