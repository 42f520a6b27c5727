//! Core types: identifiers, the energy enumeration, and user profiles.
//!
//! These are the building blocks every other module shares. They carry no
//! business rules of their own.

pub mod energy;
pub mod id;
pub mod user;

pub use energy::{EnergyType, UnknownEnergyType};
pub use id::{CardId, CommentId, DeckId, EventId, NotificationId, PostId, TargetRef, UserId};
pub use user::User;
