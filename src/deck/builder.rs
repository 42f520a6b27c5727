//! Incremental deck composition.
//!
//! `DeckBuilder` is the in-progress state of a deck being built or edited
//! one selection at a time. Unit adds are capped as they happen (4 copies
//! per card, 60 total); `finalize` runs the full validator and produces the
//! persistable `Deck`, or the violation list and no deck at all.
//!
//! Removing an absent card is a no-op, not an error.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::model::{CardLine, Deck, EnergyLine};
use super::validator::{check_composition, Violation, DECK_SIZE, MAX_COPIES};
use crate::catalog::CardCatalog;
use crate::core::{CardId, DeckId, EnergyType, UserId};

/// Rejection from a unit add operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The card already has `MAX_COPIES` copies.
    #[error("{card} is already at the {MAX_COPIES}-copy limit")]
    CardLimitReached { card: CardId },

    /// The running total is already `DECK_SIZE`.
    #[error("deck already holds {DECK_SIZE} cards")]
    DeckFull,
}

/// In-progress deck composition state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeckBuilder {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub main_energy: SmallVec<[EnergyType; 2]>,
    cards: Vec<CardLine>,
    energy: Vec<EnergyLine>,
}

impl DeckBuilder {
    /// Start an empty composition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Seed a composition from an existing deck.
    ///
    /// Copies the card/energy lines, main energy, name, description,
    /// visibility, and tags. Likes, views, and ownership are not carried:
    /// the clone is a fresh entity that never shares identity with its
    /// source.
    #[must_use]
    pub fn clone_from(source: &Deck) -> Self {
        Self {
            name: source.name.clone(),
            description: source.description.clone(),
            is_public: source.is_public,
            tags: source.tags.clone(),
            main_energy: source.main_energy.clone(),
            cards: source.cards.clone(),
            energy: source.energy.clone(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the visibility flag (builder pattern).
    #[must_use]
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Append a tag (builder pattern).
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Declare a main energy type (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn main_energy(mut self, energy: EnergyType) -> Self {
        if !self.main_energy.contains(&energy) {
            self.main_energy.push(energy);
        }
        self
    }

    /// Replace the card lines wholesale (payload intake path).
    ///
    /// Counts are taken as-is; `finalize` reports any violations.
    /// Panics on zero counts, which the request boundary rejects earlier.
    pub fn set_cards(&mut self, cards: Vec<CardLine>) {
        assert!(cards.iter().all(|l| l.count > 0), "card line counts must be positive");
        self.cards = cards;
    }

    /// Replace the energy lines wholesale (payload intake path).
    pub fn set_energy(&mut self, energy: Vec<EnergyLine>) {
        assert!(energy.iter().all(|l| l.count > 0), "energy line counts must be positive");
        self.energy = energy;
    }

    /// Current card lines.
    #[must_use]
    pub fn cards(&self) -> &[CardLine] {
        &self.cards
    }

    /// Current energy lines.
    #[must_use]
    pub fn energy(&self) -> &[EnergyLine] {
        &self.energy
    }

    /// Running total across card and energy lines.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|l| l.count).sum::<u32>()
            + self.energy.iter().map(|l| l.count).sum::<u32>()
    }

    /// Number of copies of a card currently selected.
    #[must_use]
    pub fn copies_of(&self, card: CardId) -> u32 {
        self.cards
            .iter()
            .find(|l| l.card == card)
            .map_or(0, |l| l.count)
    }

    /// Add one copy of a card.
    ///
    /// Returns the new copy count for that card. Rejects with
    /// `CardLimitReached` at the per-card cap and `DeckFull` at the
    /// running-total ceiling.
    pub fn add_card(&mut self, card: CardId) -> Result<u32, BuildError> {
        if self.total() >= DECK_SIZE {
            return Err(BuildError::DeckFull);
        }
        match self.cards.iter_mut().find(|l| l.card == card) {
            Some(line) => {
                if line.count >= MAX_COPIES {
                    return Err(BuildError::CardLimitReached { card });
                }
                line.count += 1;
                Ok(line.count)
            }
            None => {
                self.cards.push(CardLine { card, count: 1 });
                Ok(1)
            }
        }
    }

    /// Remove one copy of a card. The line disappears at zero copies;
    /// removing an absent card is a no-op.
    ///
    /// Returns the remaining copy count for that card.
    pub fn remove_card(&mut self, card: CardId) -> u32 {
        if let Some(index) = self.cards.iter().position(|l| l.card == card) {
            let line = &mut self.cards[index];
            line.count -= 1;
            let remaining = line.count;
            if remaining == 0 {
                self.cards.remove(index);
            }
            remaining
        } else {
            0
        }
    }

    /// Add one energy card of the given type. No per-type cap; only the
    /// running-total ceiling applies.
    ///
    /// Returns the new count for that energy type.
    pub fn add_energy(&mut self, energy: EnergyType) -> Result<u32, BuildError> {
        if self.total() >= DECK_SIZE {
            return Err(BuildError::DeckFull);
        }
        match self.energy.iter_mut().find(|l| l.energy == energy) {
            Some(line) => {
                line.count += 1;
                Ok(line.count)
            }
            None => {
                self.energy.push(EnergyLine { energy, count: 1 });
                Ok(1)
            }
        }
    }

    /// Remove one energy card of the given type. Symmetric with
    /// `remove_card`: absent types are a no-op.
    pub fn remove_energy(&mut self, energy: EnergyType) -> u32 {
        if let Some(index) = self.energy.iter().position(|l| l.energy == energy) {
            let line = &mut self.energy[index];
            line.count -= 1;
            let remaining = line.count;
            if remaining == 0 {
                self.energy.remove(index);
            }
            remaining
        } else {
            0
        }
    }

    /// Run the validator against the current composition without consuming
    /// the builder.
    #[must_use]
    pub fn validate(&self, catalog: &CardCatalog) -> Vec<Violation> {
        check_composition(catalog, &self.cards, &self.energy, &self.main_energy)
    }

    /// Validate and produce the persistable deck.
    ///
    /// On success the deck starts with empty likes, zero views, the given
    /// creator, and fresh timestamps. On failure the violation list is
    /// returned and nothing is produced.
    pub fn finalize(
        self,
        catalog: &CardCatalog,
        id: DeckId,
        creator: UserId,
    ) -> Result<Deck, Vec<Violation>> {
        let violations = self.validate(catalog);
        if !violations.is_empty() {
            return Err(violations);
        }

        let now = Utc::now();
        Ok(Deck {
            id,
            creator,
            name: self.name,
            description: self.description,
            is_public: self.is_public,
            cards: self.cards,
            energy: self.energy,
            main_energy: self.main_energy,
            likes: im::HashSet::new(),
            views: 0,
            tags: self.tags,
            created_at: now,
            updated_at: now,
        })
    }
}
