//! Deck aggregate, composition rules, and the save service.

pub mod builder;
pub mod model;
pub mod service;
pub mod validator;

pub use builder::{BuildError, DeckBuilder};
pub use model::{CardLine, Deck, EnergyLine};
pub use service::{DeckError, DeckService};
pub use validator::{check_composition, Violation, DECK_SIZE, MAX_COPIES};
