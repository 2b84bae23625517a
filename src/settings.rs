use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_TRANSPORT_RENT, BASE_UTILITY_RENT, COLLECT_FROM_GO, INCOME_TAX, MAX_PLAYERS,
    STARTING_BALANCE, SUPER_TAX,
};
use crate::error::GameError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Settings {
    pub collect_from_go: i64,
    pub income_tax: i64,
    pub super_tax: i64,
    pub base_transport_rent: i64,
    pub base_utility_rent: i64,
    pub always_auction: bool,
    pub starting_balance: i64,
    pub max_players: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collect_from_go: COLLECT_FROM_GO,
            income_tax: INCOME_TAX,
            super_tax: SUPER_TAX,
            base_transport_rent: BASE_TRANSPORT_RENT,
            base_utility_rent: BASE_UTILITY_RENT,
            always_auction: false,
            starting_balance: STARTING_BALANCE,
            max_players: MAX_PLAYERS,
        }
    }
}

impl Settings {
    pub fn from_json_str(raw: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
