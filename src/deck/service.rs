//! Deck persistence orchestration.
//!
//! Wires payload intake, the builder, and the validator to the deck store.
//! Saves are all-or-nothing: a composition that fails validation is
//! reported as a violation list and the previously persisted record is
//! left untouched.

use chrono::Utc;

use super::builder::DeckBuilder;
use super::model::Deck;
use super::validator::Violation;
use crate::catalog::CardCatalog;
use crate::core::{DeckId, UserId};
use crate::request::{DeckPayload, PayloadError};
use crate::store::{DeckStore, StoreError, UserStore};

/// Failure from a deck save, clone, or delete.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// The composition broke deck rules; nothing was written.
    #[error("deck validation failed with {} violation(s)", .0.len())]
    Invalid(Vec<Violation>),

    /// The request body itself was malformed.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("deck not found: {0}")]
    NotFound(DeckId),

    /// Only the creator may edit; only the creator or an admin may delete.
    #[error("{user} does not own deck {deck}")]
    NotOwner { user: UserId, deck: DeckId },

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Creates, edits, clones, and deletes decks on behalf of a user.
pub struct DeckService<'a> {
    catalog: &'a CardCatalog,
    decks: &'a dyn DeckStore,
    users: &'a dyn UserStore,
}

impl<'a> DeckService<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog, decks: &'a dyn DeckStore, users: &'a dyn UserStore) -> Self {
        Self { catalog, decks, users }
    }

    /// Validate a payload and persist a new deck owned by `actor`.
    pub fn create(&self, actor: UserId, payload: &DeckPayload) -> Result<Deck, DeckError> {
        payload.validate()?;
        let id = self.decks.allocate_id()?;
        let deck = payload
            .to_builder()
            .finalize(self.catalog, id, actor)
            .map_err(DeckError::Invalid)?;

        self.decks.create(deck.clone())?;
        log::debug!("{actor} created deck {id}");
        Ok(deck)
    }

    /// Re-validate and replace an existing deck.
    ///
    /// Creator-only. Likes, views, and the creation timestamp survive the
    /// edit; a failing composition leaves the persisted deck untouched.
    pub fn update(&self, actor: UserId, id: DeckId, payload: &DeckPayload) -> Result<Deck, DeckError> {
        let existing = self
            .decks
            .find(id)?
            .ok_or(DeckError::NotFound(id))?;
        if existing.creator != actor {
            return Err(DeckError::NotOwner { user: actor, deck: id });
        }

        payload.validate()?;
        let mut deck = payload
            .to_builder()
            .finalize(self.catalog, id, existing.creator)
            .map_err(DeckError::Invalid)?;

        deck.likes = existing.likes;
        deck.views = existing.views;
        deck.created_at = existing.created_at;
        deck.updated_at = Utc::now();

        self.decks.update(id, deck.clone())?;
        log::debug!("{actor} updated deck {id}");
        Ok(deck)
    }

    /// Clone a deck into a fresh one owned by `actor`.
    ///
    /// Private decks can only be cloned by their creator. The clone starts
    /// with no likes and no views and never shares identity with its
    /// source.
    pub fn clone_deck(&self, actor: UserId, source_id: DeckId) -> Result<Deck, DeckError> {
        let source = self
            .decks
            .find(source_id)?
            .ok_or(DeckError::NotFound(source_id))?;
        if !source.is_public && source.creator != actor {
            return Err(DeckError::NotOwner { user: actor, deck: source_id });
        }

        let id = self.decks.allocate_id()?;
        let deck = DeckBuilder::clone_from(&source)
            .finalize(self.catalog, id, actor)
            .map_err(DeckError::Invalid)?;

        self.decks.create(deck.clone())?;
        log::debug!("{actor} cloned deck {source_id} into {id}");
        Ok(deck)
    }

    /// Delete a deck. Allowed for the creator and for admins.
    pub fn delete(&self, actor: UserId, id: DeckId) -> Result<(), DeckError> {
        let deck = self
            .decks
            .find(id)?
            .ok_or(DeckError::NotFound(id))?;

        if deck.creator != actor {
            let user = self
                .users
                .find(actor)?
                .ok_or(DeckError::UserNotFound(actor))?;
            if !user.is_admin {
                return Err(DeckError::NotOwner { user: actor, deck: id });
            }
        }

        self.decks.delete(id)?;
        log::debug!("{actor} deleted deck {id}");
        Ok(())
    }

    /// Bump the view counter. Returns the new total.
    pub fn record_view(&self, id: DeckId) -> Result<u64, DeckError> {
        let mut deck = self
            .decks
            .find(id)?
            .ok_or(DeckError::NotFound(id))?;
        deck.views += 1;
        let views = deck.views;
        self.decks.update(id, deck)?;
        Ok(views)
    }

    /// Public decks, most recently updated first.
    pub fn public_decks(&self) -> Result<Vec<Deck>, DeckError> {
        let mut decks = self.decks.list_public()?;
        decks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(decks)
    }
}
