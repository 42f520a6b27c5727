//! Deck composition validation.
//!
//! `check_composition` is a pure function: given candidate card and energy
//! lines plus the catalog, it returns the full list of rule violations, in a
//! stable order, or an empty list for a valid composition. Business-rule
//! violations are data, never panics.
//!
//! Zero counts are malformed input (the composer never produces them) and
//! are asserted against, distinct from a validation failure.

use serde::{Deserialize, Serialize};

use super::model::{CardLine, EnergyLine};
use crate::catalog::CardCatalog;
use crate::core::{CardId, EnergyType};

/// Required total across card and energy lines.
pub const DECK_SIZE: u32 = 60;

/// Maximum copies of a single card. Energy has no per-type cap.
pub const MAX_COPIES: u32 = 4;

/// A single composition rule violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Violation {
    /// Total card + energy count is not exactly `DECK_SIZE`.
    TotalCountMismatch { actual: u32, expected: u32 },

    /// A card line exceeds `MAX_COPIES`.
    CardCountExceeded { card: CardId, count: u32 },

    /// A card ID that the catalog cannot resolve.
    UnknownCard { card: CardId },

    /// No main energy type declared.
    NoMainEnergy,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::TotalCountMismatch { actual, expected } => {
                write!(f, "deck has {actual} cards, expected exactly {expected}")
            }
            Violation::CardCountExceeded { card, count } => {
                write!(f, "{card} appears {count} times, limit is {MAX_COPIES}")
            }
            Violation::UnknownCard { card } => write!(f, "{card} is not in the catalog"),
            Violation::NoMainEnergy => write!(f, "no main energy type selected"),
        }
    }
}

/// Check a candidate composition against the deck rules.
///
/// Returns every violation, ordered: total-count first, then per-line card
/// violations in input order, then the main-energy check. An empty list
/// means the composition is valid.
///
/// Panics if any line carries a zero count; counts must be positive.
#[must_use]
pub fn check_composition(
    catalog: &CardCatalog,
    cards: &[CardLine],
    energy: &[EnergyLine],
    main_energy: &[EnergyType],
) -> Vec<Violation> {
    for line in cards {
        assert!(line.count > 0, "card line counts must be positive");
    }
    for line in energy {
        assert!(line.count > 0, "energy line counts must be positive");
    }

    let mut violations = Vec::new();

    let total: u32 = cards.iter().map(|l| l.count).sum::<u32>()
        + energy.iter().map(|l| l.count).sum::<u32>();
    if total != DECK_SIZE {
        violations.push(Violation::TotalCountMismatch {
            actual: total,
            expected: DECK_SIZE,
        });
    }

    for line in cards {
        if line.count > MAX_COPIES {
            violations.push(Violation::CardCountExceeded {
                card: line.card,
                count: line.count,
            });
        }
        if !catalog.contains(line.card) {
            violations.push(Violation::UnknownCard { card: line.card });
        }
    }

    if main_energy.is_empty() {
        violations.push(Violation::NoMainEnergy);
    }

    violations
}
