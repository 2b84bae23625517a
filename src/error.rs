use thiserror::Error;

use crate::types::DeckKind;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown place: {0}")]
    UnknownPlace(String),
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("unknown player id {0}")]
    UnknownPlayer(usize),
    #[error("{0:?} deck has no cards")]
    EmptyDeck(DeckKind),

    #[error("player name must not be empty")]
    EmptyName,
    #[error("player name {0:?} is too short")]
    NameTooShort(String),
    #[error("player name {0:?} is already taken")]
    NameTaken(String),
    #[error("at most {0} players can join")]
    TooManyPlayers(usize),
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("{player} does not own {property}")]
    NotOwner { player: String, property: String },
    #[error("{0} is not a site")]
    NotASite(String),
    #[error("{player} does not hold every site in the color group of {property}")]
    NoMonopoly { player: String, property: String },
    #[error("{0} already has the maximum number of houses")]
    HouseLimit(String),
    #[error("{0} needs four houses before a hotel")]
    HotelNeedsHouses(String),
    #[error("{0} already has a hotel")]
    HotelPresent(String),
    #[error("{0} is mortgaged")]
    Mortgaged(String),
    #[error("{0} is not mortgaged")]
    NotMortgaged(String),
    #[error("{0} still has improvements")]
    ImprovementsPresent(String),
    #[error("{player} cannot afford {amount}")]
    InsufficientFunds { player: String, amount: i64 },

    #[error("failed to read settings: {0}")]
    SettingsIo(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    SettingsFormat(#[from] serde_json::Error),
}
