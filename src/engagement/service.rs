//! Engagement toggles wired to persistence and notification.
//!
//! Each operation loads the target, applies the set transition, persists
//! only when membership actually changed, and schedules a like notification
//! only on a transition *into* the engaged state on someone else's content.
//! A disengagement retracts the matching notification instead of emitting
//! one, so a like/unlike cycle cannot pile up notifications. Converging
//! repeats touch nothing.

use super::action::{ToggleAction, UnknownAction};
use super::toggle::{self, ToggleOutcome};
use crate::catalog::CardCatalog;
use crate::core::{CardId, CommentId, DeckId, TargetRef, UserId};
use crate::notify::{NotificationEmitter, NotificationKind};
use crate::store::{CommentStore, DeckStore, NotificationStore, StoreError, UserStore};

/// Failure from an engagement operation.
#[derive(Debug, thiserror::Error)]
pub enum EngagementError {
    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),

    #[error("deck not found: {0}")]
    DeckNotFound(DeckId),

    #[error("card not found: {0}")]
    CardNotFound(CardId),

    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Applies like and favorite toggles on behalf of an authenticated user.
pub struct EngagementService<'a> {
    catalog: &'a CardCatalog,
    decks: &'a dyn DeckStore,
    users: &'a dyn UserStore,
    comments: &'a dyn CommentStore,
    notifications: &'a dyn NotificationStore,
}

impl<'a> EngagementService<'a> {
    #[must_use]
    pub fn new(
        catalog: &'a CardCatalog,
        decks: &'a dyn DeckStore,
        users: &'a dyn UserStore,
        comments: &'a dyn CommentStore,
        notifications: &'a dyn NotificationStore,
    ) -> Self {
        Self { catalog, decks, users, comments, notifications }
    }

    /// Apply a `"like"`/`"unlike"` token to a deck's likes set.
    ///
    /// Returns the outcome with the updated like count. A like on someone
    /// else's deck notifies the creator; repeats and unlikes never do.
    pub fn toggle_deck_like(
        &self,
        actor: UserId,
        deck_id: DeckId,
        token: &str,
    ) -> Result<ToggleOutcome, EngagementError> {
        let action = ToggleAction::from_like_token(token)?;
        let mut deck = self
            .decks
            .find(deck_id)?
            .ok_or(EngagementError::DeckNotFound(deck_id))?;
        let creator = deck.creator;

        let outcome = toggle::apply(&mut deck.likes, actor, action);
        if outcome.changed {
            self.decks.update(deck_id, deck)?;
            log::debug!("{actor} {token}d deck {deck_id}, count now {}", outcome.count);

            let emitter = NotificationEmitter::new(self.notifications);
            let target = TargetRef::Deck(deck_id);
            match action {
                ToggleAction::Engage => {
                    emitter.emit(NotificationKind::Like, target, Some(creator), actor);
                }
                ToggleAction::Disengage => {
                    emitter.retract(NotificationKind::Like, target, Some(creator), actor);
                }
            }
        }
        Ok(outcome)
    }

    /// Apply a `"favorite"`/`"unfavorite"` token to the actor's own
    /// favorite-cards set.
    ///
    /// Catalog cards are owned by no one, so favoriting never notifies.
    pub fn toggle_card_favorite(
        &self,
        actor: UserId,
        card_id: CardId,
        token: &str,
    ) -> Result<ToggleOutcome, EngagementError> {
        let action = ToggleAction::from_favorite_token(token)?;
        if !self.catalog.contains(card_id) {
            return Err(EngagementError::CardNotFound(card_id));
        }
        let mut user = self
            .users
            .find(actor)?
            .ok_or(EngagementError::UserNotFound(actor))?;

        let outcome = toggle::apply(&mut user.favorite_cards, card_id, action);
        if outcome.changed {
            self.users.update(actor, user)?;
            log::debug!("{actor} {token}d card {card_id}");
        }
        Ok(outcome)
    }

    /// Apply a `"like"`/`"unlike"` token to a comment's likes set.
    pub fn toggle_comment_like(
        &self,
        actor: UserId,
        comment_id: CommentId,
        token: &str,
    ) -> Result<ToggleOutcome, EngagementError> {
        let action = ToggleAction::from_like_token(token)?;
        let mut comment = self
            .comments
            .find(comment_id)?
            .ok_or(EngagementError::CommentNotFound(comment_id))?;

        let outcome = toggle::apply(&mut comment.likes, actor, action);
        if outcome.changed {
            self.comments.update(comment_id, comment)?;
        }
        Ok(outcome)
    }
}
