//! Directional toggle actions.
//!
//! Clients state the direction they want ("like" vs "unlike"); the engine
//! never infers it from current state. Each endpoint family accepts exactly
//! two tokens, and anything else is a rejected request, not a silent no-op.

use serde::{Deserialize, Serialize};

/// Requested toggle direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleAction {
    /// Enter the engaged state (like / favorite).
    Engage,
    /// Leave the engaged state (unlike / unfavorite).
    Disengage,
}

/// An action token outside the endpoint's two allowed strings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown action token: {token:?}")]
pub struct UnknownAction {
    pub token: String,
}

impl ToggleAction {
    /// Parse a like-endpoint token: `"like"` or `"unlike"`.
    pub fn from_like_token(token: &str) -> Result<Self, UnknownAction> {
        match token {
            "like" => Ok(ToggleAction::Engage),
            "unlike" => Ok(ToggleAction::Disengage),
            _ => Err(UnknownAction { token: token.to_string() }),
        }
    }

    /// Parse a favorite-endpoint token: `"favorite"` or `"unfavorite"`.
    pub fn from_favorite_token(token: &str) -> Result<Self, UnknownAction> {
        match token {
            "favorite" => Ok(ToggleAction::Engage),
            "unfavorite" => Ok(ToggleAction::Disengage),
            _ => Err(UnknownAction { token: token.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_tokens() {
        assert_eq!(ToggleAction::from_like_token("like"), Ok(ToggleAction::Engage));
        assert_eq!(ToggleAction::from_like_token("unlike"), Ok(ToggleAction::Disengage));
    }

    #[test]
    fn test_favorite_tokens() {
        assert_eq!(
            ToggleAction::from_favorite_token("favorite"),
            Ok(ToggleAction::Engage)
        );
        assert_eq!(
            ToggleAction::from_favorite_token("unfavorite"),
            Ok(ToggleAction::Disengage)
        );
    }

    #[test]
    fn test_tokens_are_per_endpoint() {
        // "favorite" is not a like-endpoint token, and vice versa.
        assert!(ToggleAction::from_like_token("favorite").is_err());
        assert!(ToggleAction::from_favorite_token("unlike").is_err());
        assert!(ToggleAction::from_like_token("Like").is_err());
        assert!(ToggleAction::from_like_token("").is_err());
    }
}
