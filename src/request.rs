//! Boundary request payloads.
//!
//! Explicit schemas for the JSON bodies the platform accepts, validated
//! here before anything reaches the deck or engagement logic. Field names
//! mirror the wire format (`cardId`, `isPublic`, `mainEnergy`, energy
//! `type`).
//!
//! Payload validation catches malformed client input (zero counts, blank
//! names); deck *rule* violations are the validator's job and are reported
//! separately.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, EnergyType};
use crate::deck::{CardLine, DeckBuilder, EnergyLine};

/// Malformed request body, distinct from a business-rule violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("deck name must not be empty")]
    EmptyName,

    #[error("count for {card} must be a positive integer")]
    NonPositiveCardCount { card: CardId },

    #[error("count for {energy} energy must be a positive integer")]
    NonPositiveEnergyCount { energy: EnergyType },
}

/// One card selection of a deck-save body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSelection {
    pub card_id: CardId,
    pub count: u32,
}

/// One energy selection of a deck-save body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergySelection {
    #[serde(rename = "type")]
    pub energy: EnergyType,
    pub count: u32,
}

/// `POST` body for deck create and update.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckPayload {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub is_public: bool,

    pub main_energy: Vec<EnergyType>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub cards: Vec<CardSelection>,

    pub energy: Vec<EnergySelection>,
}

impl DeckPayload {
    /// Reject malformed input: blank name, non-positive counts.
    pub fn validate(&self) -> Result<(), PayloadError> {
        if self.name.trim().is_empty() {
            return Err(PayloadError::EmptyName);
        }
        for selection in &self.cards {
            if selection.count == 0 {
                return Err(PayloadError::NonPositiveCardCount { card: selection.card_id });
            }
        }
        for selection in &self.energy {
            if selection.count == 0 {
                return Err(PayloadError::NonPositiveEnergyCount { energy: selection.energy });
            }
        }
        Ok(())
    }

    /// Convert a validated payload into composition state.
    ///
    /// Repeated selections of the same card or energy type are merged by
    /// summing counts, so the per-card cap sees the real total.
    #[must_use]
    pub fn to_builder(&self) -> DeckBuilder {
        let mut builder = DeckBuilder::new(self.name.trim());
        builder.description = self.description.clone();
        builder.is_public = self.is_public;
        builder.tags = self.tags.clone();
        for &energy in &self.main_energy {
            builder = builder.main_energy(energy);
        }

        let mut cards: Vec<CardLine> = Vec::new();
        for selection in &self.cards {
            match cards.iter_mut().find(|l| l.card == selection.card_id) {
                Some(line) => line.count += selection.count,
                None => cards.push(CardLine { card: selection.card_id, count: selection.count }),
            }
        }
        builder.set_cards(cards);

        let mut energy: Vec<EnergyLine> = Vec::new();
        for selection in &self.energy {
            match energy.iter_mut().find(|l| l.energy == selection.energy) {
                Some(line) => line.count += selection.count,
                None => energy.push(EnergyLine { energy: selection.energy, count: selection.count }),
            }
        }
        builder.set_energy(energy);

        builder
    }
}

/// `POST` body for like/unlike and favorite/unfavorite endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TogglePayload {
    pub action: String,
}

/// `POST` body for comment submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommentPayload {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> DeckPayload {
        serde_json::from_str(
            r#"{
                "name": "Mono Fire",
                "description": "burn",
                "isPublic": true,
                "mainEnergy": ["Fire"],
                "tags": ["aggro"],
                "cards": [{"cardId": 1, "count": 4}, {"cardId": 2, "count": 3}],
                "energy": [{"type": "Fire", "count": 53}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_wire_field_names() {
        let p = payload();
        assert!(p.is_public);
        assert_eq!(p.main_energy, vec![EnergyType::Fire]);
        assert_eq!(p.cards[0].card_id, CardId::new(1));
        assert_eq!(p.energy[0].energy, EnergyType::Fire);
    }

    #[test]
    fn test_validate_accepts_wellformed() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let mut p = payload();
        p.cards[0].count = 0;
        assert_eq!(
            p.validate(),
            Err(PayloadError::NonPositiveCardCount { card: CardId::new(1) })
        );
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut p = payload();
        p.name = "   ".into();
        assert_eq!(p.validate(), Err(PayloadError::EmptyName));
    }

    #[test]
    fn test_to_builder_merges_duplicate_selections() {
        let mut p = payload();
        p.cards.push(CardSelection { card_id: CardId::new(1), count: 1 });

        let builder = p.to_builder();
        assert_eq!(builder.copies_of(CardId::new(1)), 5);
        assert_eq!(builder.total(), 4 + 3 + 53 + 1);
    }

    #[test]
    fn test_toggle_payload_shape() {
        let p: TogglePayload = serde_json::from_str(r#"{"action": "unlike"}"#).unwrap();
        assert_eq!(p.action, "unlike");
    }
}
