//! The fixed energy-type enumeration.
//!
//! Every card carries one energy type, decks declare one or more main
//! energy types, and energy card selections are keyed by it. The set of
//! types is closed; anything outside it is rejected at deserialization.

use serde::{Deserialize, Serialize};

/// Energy type of a card or energy selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyType {
    Grass,
    Fire,
    Water,
    Electric,
    Psychic,
    Fighting,
    Dark,
    Steel,
    Colorless,
}

impl EnergyType {
    /// All energy types, in declaration order.
    pub const ALL: [EnergyType; 9] = [
        EnergyType::Grass,
        EnergyType::Fire,
        EnergyType::Water,
        EnergyType::Electric,
        EnergyType::Psychic,
        EnergyType::Fighting,
        EnergyType::Dark,
        EnergyType::Steel,
        EnergyType::Colorless,
    ];

    /// Canonical name, matching the persisted wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EnergyType::Grass => "Grass",
            EnergyType::Fire => "Fire",
            EnergyType::Water => "Water",
            EnergyType::Electric => "Electric",
            EnergyType::Psychic => "Psychic",
            EnergyType::Fighting => "Fighting",
            EnergyType::Dark => "Dark",
            EnergyType::Steel => "Steel",
            EnergyType::Colorless => "Colorless",
        }
    }
}

impl std::fmt::Display for EnergyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EnergyType {
    type Err = UnknownEnergyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnergyType::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownEnergyType(s.to_string()))
    }
}

/// Error returned when parsing a string that is not a known energy type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown energy type: {0:?}")]
pub struct UnknownEnergyType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_canonical_names() {
        for energy in EnergyType::ALL {
            assert_eq!(energy.as_str().parse::<EnergyType>(), Ok(energy));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("Fairy".parse::<EnergyType>().is_err());
        assert!("fire".parse::<EnergyType>().is_err()); // case-sensitive
    }

    #[test]
    fn test_wire_form_matches_name() {
        let json = serde_json::to_string(&EnergyType::Electric).unwrap();
        assert_eq!(json, "\"Electric\"");

        let back: EnergyType = serde_json::from_str("\"Colorless\"").unwrap();
        assert_eq!(back, EnergyType::Colorless);
    }
}
