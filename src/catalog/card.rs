//! Card reference data.
//!
//! A `Card` holds the immutable printed attributes of a catalog entry:
//! names, energy type, rarity, HP, kind, and attacks. Per-deck state
//! (how many copies a deck runs) lives on the `Deck` aggregate, never here.
//!
//! Cards are created by catalog ingestion and never mutated by the core.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, EnergyType};

/// Evolution stage / card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Basic,
    Stage1,
    Stage2,
    Ex,
    Item,
    Supporter,
    Stadium,
}

/// Printed rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    DoubleRare,
    SecretRare,
}

/// A single attack printed on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Attack name.
    pub name: String,

    /// Energy cost, in printed order.
    pub cost: SmallVec<[EnergyType; 4]>,

    /// Base damage. Zero for pure-effect attacks.
    pub damage: u32,

    /// Effect text. Empty for vanilla attacks.
    pub text: String,
}

impl Attack {
    /// Create an attack with no effect text.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: impl IntoIterator<Item = EnergyType>, damage: u32) -> Self {
        Self {
            name: name.into(),
            cost: cost.into_iter().collect(),
            damage,
            text: String::new(),
        }
    }

    /// Set the effect text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Immutable card catalog entry.
///
/// ## Example
///
/// ```
/// use tcg_decks::catalog::{Attack, Card, CardKind, Rarity};
/// use tcg_decks::core::{CardId, EnergyType};
///
/// let card = Card::new(CardId::new(1), "リザードン", "Charizard", EnergyType::Fire)
///     .kind(CardKind::Stage2)
///     .rarity(Rarity::DoubleRare)
///     .hp(180)
///     .with_attack(Attack::new("Fire Blast", [EnergyType::Fire, EnergyType::Fire], 120));
///
/// assert_eq!(card.name_en, "Charizard");
/// assert_eq!(card.attacks.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique catalog identifier.
    pub id: CardId,

    /// Localized display name.
    pub name: String,

    /// English name.
    pub name_en: String,

    /// Energy type of the card. Trainers are `Colorless`.
    pub energy: EnergyType,

    /// Printed rarity.
    pub rarity: Rarity,

    /// Hit points. Zero for trainer cards.
    pub hp: u32,

    /// Evolution stage / kind.
    pub kind: CardKind,

    /// Printed attacks, if any.
    pub attacks: SmallVec<[Attack; 2]>,
}

impl Card {
    /// Create a card with default kind (`Basic`), rarity (`Common`), and no attacks.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        name_en: impl Into<String>,
        energy: EnergyType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            name_en: name_en.into(),
            energy,
            rarity: Rarity::Common,
            hp: 0,
            kind: CardKind::Basic,
            attacks: SmallVec::new(),
        }
    }

    /// Set the card kind (builder pattern).
    #[must_use]
    pub fn kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the hit points (builder pattern).
    #[must_use]
    pub fn hp(mut self, hp: u32) -> Self {
        self.hp = hp;
        self
    }

    /// Append an attack (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }
}
