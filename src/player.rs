use serde::Serialize;

use crate::constants::MIN_NAME_LEN;
use crate::error::GameError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub balance: i64,
    pub position: usize,
    #[serde(rename = "jailFreeCards")]
    pub jail_free_cards: u32,
    pub bankrupt: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
            position: 0,
            jail_free_cards: 0,
            bankrupt: false,
        }
    }
}

pub fn validate_player_name(name: &str, existing: &[Player]) -> Result<(), GameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GameError::EmptyName);
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(GameError::NameTooShort(trimmed.to_string()));
    }
    let lowered = trimmed.to_lowercase();
    if existing.iter().any(|p| p.name.to_lowercase() == lowered) {
        return Err(GameError::NameTaken(trimmed.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_player_name, Player};
    use crate::error::GameError;

    #[test]
    fn names_are_unique_ignoring_case() {
        let existing = vec![Player::new("Alice", 100)];
        assert!(matches!(
            validate_player_name("ALICE", &existing),
            Err(GameError::NameTaken(_))
        ));
        assert!(validate_player_name("Bob", &existing).is_ok());
    }

    #[test]
    fn short_and_blank_names_are_rejected() {
        assert!(matches!(
            validate_player_name("  ", &[]),
            Err(GameError::EmptyName)
        ));
        assert!(matches!(
            validate_player_name("Al", &[]),
            Err(GameError::NameTooShort(_))
        ));
    }
}
