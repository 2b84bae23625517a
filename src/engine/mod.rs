use std::mem;

use tracing::{debug, info, warn};

use crate::board::{standard_board, standard_properties, Board, Square};
use crate::cards::{chance_cards, chest_cards, Deck};
use crate::error::GameError;
use crate::player::{validate_player_name, Player};
use crate::property::{Property, PropertyKind};
use crate::rng::Rng;
use crate::settings::Settings;
use crate::types::{DeckKind, GameEvent, GameSummary, PlayerId, PlayerStanding};

mod arrival;
mod auction;
mod card_system;
mod management;
mod movement;
mod rent;

#[cfg(test)]
mod test_support;

pub use self::arrival::TurnOutcome;
pub use self::movement::{advance, steps_to, Destination, MoveOutcome};
pub use self::rent::{count_owned, owns_color_group, rent_owed};

#[derive(Clone, Debug)]
pub struct Game {
    pub settings: Settings,
    pub board: Board,
    pub properties: Vec<Property>,
    pub players: Vec<Player>,

    chance: Deck,
    chest: Deck,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new<S: AsRef<str>>(names: &[S], settings: Settings, seed: u32) -> Result<Self, GameError> {
        let mut rng = Rng::new(seed);
        let chance = Deck::shuffled(DeckKind::Chance, chance_cards(), &mut rng);
        let chest = Deck::shuffled(DeckKind::Chest, chest_cards(), &mut rng);
        Self::with_parts(
            names,
            settings,
            standard_board(),
            standard_properties(),
            chance,
            chest,
        )
    }

    pub fn with_parts<S: AsRef<str>>(
        names: &[S],
        settings: Settings,
        board: Board,
        properties: Vec<Property>,
        chance: Deck,
        chest: Deck,
    ) -> Result<Self, GameError> {
        if board.is_empty() {
            return Err(GameError::UnknownPlace(Square::Go.name().to_string()));
        }
        for square in board.squares() {
            if let Square::Property(name) = square {
                if !properties.iter().any(|p| &p.name == name) {
                    return Err(GameError::UnknownProperty(name.clone()));
                }
            }
        }
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if names.len() > settings.max_players {
            return Err(GameError::TooManyPlayers(settings.max_players));
        }

        let mut players: Vec<Player> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            validate_player_name(name, &players)?;
            players.push(Player::new(name.trim(), settings.starting_balance));
        }

        Ok(Self {
            settings,
            board,
            properties,
            players,
            chance,
            chest,
            events: Vec::new(),
        })
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players.get_mut(id).ok_or(GameError::UnknownPlayer(id))
    }

    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| !player.bankrupt)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.active_players().len() <= 1
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.active_players().as_slice() {
            [only] => self.players.get(*only),
            _ => None,
        }
    }

    pub fn property(&self, name: &str) -> Result<&Property, GameError> {
        let index = self.property_index(name)?;
        Ok(&self.properties[index])
    }

    pub(crate) fn property_index(&self, name: &str) -> Result<usize, GameError> {
        self.properties
            .iter()
            .position(|property| property.name == name)
            .ok_or_else(|| GameError::UnknownProperty(name.to_string()))
    }

    pub fn properties_of(&self, id: PlayerId) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(move |property| property.is_owned_by(id))
    }

    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::Chest => &self.chest,
        }
    }

    pub(crate) fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::Chest => &mut self.chest,
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        match &event {
            GameEvent::Bankrupt { .. } | GameEvent::PurchaseFailed { .. } => warn!("{event}"),
            GameEvent::Moved { .. } | GameEvent::BidPlaced { .. } => debug!("{event}"),
            _ => info!("{event}"),
        }
        self.events.push(event);
    }

    /// Applies `delta` to the balance. A decrease that leaves the balance at
    /// or below zero bankrupts the player, once.
    pub fn alter_balance(&mut self, id: PlayerId, delta: i64) -> Result<(), GameError> {
        let player = self.player_mut(id)?;
        player.balance += delta;
        if delta >= 0 || player.balance > 0 || player.bankrupt {
            return Ok(());
        }

        player.bankrupt = true;
        let event = GameEvent::Bankrupt {
            player: player.name.clone(),
            balance: player.balance,
        };
        for property in self.properties.iter_mut().filter(|p| p.is_owned_by(id)) {
            property.release();
        }
        self.push_event(event);
        Ok(())
    }

    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: i64) -> Result<(), GameError> {
        self.player(to)?;
        self.alter_balance(from, -amount)?;
        self.alter_balance(to, amount)
    }

    fn net_worth(&self, id: PlayerId, balance: i64) -> i64 {
        let holdings: i64 = self
            .properties_of(id)
            .map(|property| {
                if property.mortgaged {
                    return property.price - property.mortgage_amount;
                }
                let improvements = match &property.kind {
                    PropertyKind::Site(site) => {
                        i64::from(site.houses) * site.house_cost
                            + if site.hotel {
                                site.hotel_cost + 4 * site.house_cost
                            } else {
                                0
                            }
                    }
                    _ => 0,
                };
                property.price + improvements
            })
            .sum();
        balance + holdings
    }

    pub fn build_summary(&self) -> GameSummary {
        let standings = self
            .players
            .iter()
            .enumerate()
            .map(|(id, player)| PlayerStanding {
                name: player.name.clone(),
                balance: player.balance,
                position: player.position,
                jail_free_cards: player.jail_free_cards,
                bankrupt: player.bankrupt,
                properties: self.properties_of(id).map(|p| p.name.clone()).collect(),
                net_worth: self.net_worth(id, player.balance),
            })
            .collect();

        GameSummary {
            winner: self.winner().map(|player| player.name.clone()),
            active_players: self.active_players().len(),
            owned_properties: self.properties.iter().filter(|p| p.owner.is_some()).count(),
            standings,
        }
    }
}
