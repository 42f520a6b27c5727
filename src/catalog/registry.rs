//! Card catalog for reference-data lookup.
//!
//! The `CardCatalog` stores every known card and resolves IDs for the deck
//! validator and composer. It is read-only from the core's point of view:
//! registration happens at ingestion, lookups everywhere else.

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::CardId;

/// Catalog of immutable card entries.
///
/// ## Example
///
/// ```
/// use tcg_decks::catalog::{Card, CardCatalog};
/// use tcg_decks::core::{CardId, EnergyType};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new(CardId::new(1), "フシギダネ", "Bulbasaur", EnergyType::Grass));
///
/// let found = catalog.resolve(CardId::new(1)).unwrap();
/// assert_eq!(found.name_en, "Bulbasaur");
/// assert!(catalog.resolve(CardId::new(99)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card entry.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID. The closure receives the ID so the entry
    /// can reference itself.
    pub fn register_auto(&mut self, build: impl FnOnce(CardId) -> Card) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        let card = build(id);
        assert_eq!(card.id, id, "register_auto entry must use the assigned ID");
        self.register(card);
        id
    }

    /// Resolve a card ID to its catalog entry.
    #[must_use]
    pub fn resolve(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find entries matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
