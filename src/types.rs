use std::fmt;

use serde::Serialize;

pub type PlayerId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Site,
    Transport,
    Utility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    Chance,
    Chest,
}

impl fmt::Display for DeckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chance => write!(f, "Chance"),
            Self::Chest => write!(f, "Community Chest"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Moved {
        player: String,
        from: usize,
        to: usize,
        #[serde(rename = "passedGo")]
        passed_go: bool,
    },
    CollectedGo {
        player: String,
        amount: i64,
    },
    Arrived {
        player: String,
        place: String,
    },
    Arrested {
        player: String,
    },
    TaxPaid {
        player: String,
        place: String,
        amount: i64,
    },
    CardDrawn {
        player: String,
        deck: DeckKind,
        description: String,
    },
    JailCardGranted {
        player: String,
        total: u32,
    },
    RentPaid {
        from: String,
        to: String,
        property: String,
        amount: i64,
    },
    PropertyBought {
        player: String,
        property: String,
        price: i64,
    },
    PurchaseFailed {
        player: String,
        property: String,
        price: i64,
    },
    AuctionStarted {
        property: String,
        increments: [i64; 4],
    },
    BidPlaced {
        player: String,
        property: String,
        amount: i64,
    },
    BidWithdrawn {
        player: String,
        property: String,
    },
    AuctionWon {
        player: String,
        property: String,
        amount: i64,
    },
    HouseBuilt {
        player: String,
        property: String,
        houses: u8,
    },
    HotelBuilt {
        player: String,
        property: String,
    },
    PropertyMortgaged {
        player: String,
        property: String,
        amount: i64,
    },
    PropertyUnmortgaged {
        player: String,
        property: String,
        amount: i64,
    },
    Bankrupt {
        player: String,
        balance: i64,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved {
                player, from, to, ..
            } => write!(f, "{player} moved from square {from} to square {to}"),
            Self::CollectedGo { player, amount } => {
                write!(f, "{player} passed Go and collected {amount}")
            }
            Self::Arrived { player, place } => write!(f, "{player} landed on {place}"),
            Self::Arrested { player } => write!(f, "{player} was sent to Jail"),
            Self::TaxPaid {
                player,
                place,
                amount,
            } => write!(f, "{player} paid {amount} of {place}"),
            Self::CardDrawn {
                player,
                deck,
                description,
            } => write!(f, "{player} drew {deck}: {description}"),
            Self::JailCardGranted { player, total } => {
                write!(f, "{player} now holds {total} Get Out of Jail Free card(s)")
            }
            Self::RentPaid {
                from,
                to,
                property,
                amount,
            } => write!(f, "{from} paid {amount} rent to {to} for {property}"),
            Self::PropertyBought {
                player,
                property,
                price,
            } => write!(f, "{player} bought {property} for {price}"),
            Self::PurchaseFailed {
                player,
                property,
                price,
            } => write!(f, "{player} cannot afford {property} at {price}"),
            Self::AuctionStarted { property, .. } => write!(f, "Starting auction for {property}"),
            Self::BidPlaced {
                player,
                property,
                amount,
            } => write!(f, "{player} bid {amount} for {property}"),
            Self::BidWithdrawn { player, property } => {
                write!(f, "{player} left the auction for {property}")
            }
            Self::AuctionWon {
                player,
                property,
                amount,
            } => write!(f, "{player} won the auction for {property} at {amount}!"),
            Self::HouseBuilt {
                player,
                property,
                houses,
            } => write!(f, "{player} built house {houses} on {property}"),
            Self::HotelBuilt { player, property } => {
                write!(f, "{player} built a hotel on {property}")
            }
            Self::PropertyMortgaged {
                player,
                property,
                amount,
            } => write!(f, "{player} mortgaged {property} for {amount}"),
            Self::PropertyUnmortgaged {
                player,
                property,
                amount,
            } => write!(f, "{player} lifted the mortgage on {property} for {amount}"),
            Self::Bankrupt { player, balance } => {
                write!(f, "{player} is bankrupt (balance {balance})")
            }
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PlayerStanding {
    pub name: String,
    pub balance: i64,
    pub position: usize,
    #[serde(rename = "jailFreeCards")]
    pub jail_free_cards: u32,
    pub bankrupt: bool,
    pub properties: Vec<String>,
    #[serde(rename = "netWorth")]
    pub net_worth: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct GameSummary {
    pub winner: Option<String>,
    #[serde(rename = "activePlayers")]
    pub active_players: usize,
    #[serde(rename = "ownedProperties")]
    pub owned_properties: usize,
    pub standings: Vec<PlayerStanding>,
}
