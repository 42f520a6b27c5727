//! The persisted deck aggregate.
//!
//! A deck belongs to exactly one creator. Its card and energy selections are
//! `(id, count)` lines; the likes set uses `im::HashSet` so toggles are set
//! membership and snapshots clone in O(1).

use chrono::{DateTime, Utc};
use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, DeckId, EnergyType, UserId};

/// One card line of a deck: a catalog card and how many copies it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLine {
    pub card: CardId,
    pub count: u32,
}

/// One energy line of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLine {
    pub energy: EnergyType,
    pub count: u32,
}

/// A user-built deck.
///
/// Invariants (enforced by the validator at creation and on every edit):
/// - total of card counts plus energy counts is exactly 60
/// - every card count is in `1..=4`
/// - `main_energy` is non-empty
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    /// Unique identifier, assigned by the deck store.
    pub id: DeckId,

    /// Owning user. Only the creator (or an admin, for deletes) may mutate
    /// anything other than the likes set and view counter.
    pub creator: UserId,

    /// Deck name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Whether the deck appears in public listings.
    pub is_public: bool,

    /// Card selections.
    pub cards: Vec<CardLine>,

    /// Energy selections.
    pub energy: Vec<EnergyLine>,

    /// Declared main energy type(s). Non-empty.
    pub main_energy: SmallVec<[EnergyType; 2]>,

    /// Users who liked this deck. Each user appears at most once.
    pub likes: ImHashSet<UserId>,

    /// View counter.
    pub views: u64,

    /// Free-form tags.
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    /// Total number of cards, energy included.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        let cards: u32 = self.cards.iter().map(|l| l.count).sum();
        let energy: u32 = self.energy.iter().map(|l| l.count).sum();
        cards + energy
    }

    /// Number of copies of a card, zero if absent.
    #[must_use]
    pub fn copies_of(&self, card: CardId) -> u32 {
        self.cards
            .iter()
            .find(|l| l.card == card)
            .map_or(0, |l| l.count)
    }

    /// Current like count.
    #[must_use]
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn deck() -> Deck {
        Deck {
            id: DeckId::new(1),
            creator: UserId::new(1),
            name: "Test".into(),
            description: String::new(),
            is_public: true,
            cards: vec![
                CardLine { card: CardId::new(1), count: 4 },
                CardLine { card: CardId::new(2), count: 2 },
            ],
            energy: vec![EnergyLine { energy: EnergyType::Fire, count: 10 }],
            main_energy: smallvec![EnergyType::Fire],
            likes: ImHashSet::new(),
            views: 0,
            tags: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_count_sums_cards_and_energy() {
        assert_eq!(deck().total_count(), 16);
    }

    #[test]
    fn test_copies_of() {
        let d = deck();
        assert_eq!(d.copies_of(CardId::new(1)), 4);
        assert_eq!(d.copies_of(CardId::new(9)), 0);
    }

    #[test]
    fn test_likes_are_a_set() {
        let mut d = deck();
        d.likes.insert(UserId::new(5));
        d.likes.insert(UserId::new(5));
        assert_eq!(d.like_count(), 1);
    }
}
