//! Immutable card reference data and lookup.

pub mod card;
pub mod registry;

pub use card::{Attack, Card, CardKind, Rarity};
pub use registry::CardCatalog;
