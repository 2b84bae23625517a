use super::*;
use crate::cards::{Card, CardEffect};
use crate::types::PropertyCategory;

impl Game {
    pub fn apply_card(&mut self, id: PlayerId, kind: DeckKind) -> Result<Card, GameError> {
        let card = self.deck_mut(kind).draw()?;
        let name = self.player(id)?.name.clone();
        self.push_event(GameEvent::CardDrawn {
            player: name,
            deck: kind,
            description: card.description.clone(),
        });
        self.apply_effect(id, &card.effect)?;
        Ok(card)
    }

    pub fn apply_effect(&mut self, id: PlayerId, effect: &CardEffect) -> Result<(), GameError> {
        match effect {
            CardEffect::MoveTo { place, collect } => {
                self.move_player(id, Destination::Place(place), *collect)?;
            }
            CardEffect::MoveBy { steps } => {
                self.move_player(id, Destination::Steps(*steps), true)?;
            }
            CardEffect::AdvanceToNearest { category } => {
                let steps = self.steps_to_nearest(id, *category)?;
                self.move_player(id, Destination::Steps(steps), true)?;
            }
            CardEffect::AlterBalance { amount } => self.alter_balance(id, *amount)?,
            CardEffect::TransferToAll { amount } => {
                for other in self.other_active_players(id) {
                    self.transfer(id, other, *amount)?;
                }
            }
            CardEffect::CollectFromAll { amount } => {
                for other in self.other_active_players(id) {
                    self.transfer(other, id, *amount)?;
                }
            }
            CardEffect::GrantJailCard => {
                let player = self.player_mut(id)?;
                player.jail_free_cards += 1;
                let event = GameEvent::JailCardGranted {
                    player: player.name.clone(),
                    total: player.jail_free_cards,
                };
                self.push_event(event);
            }
            CardEffect::ArrestPlayer => self.arrest_player(id)?,
            CardEffect::TaxByImprovements {
                per_house,
                per_hotel,
            } => {
                let total: i64 = self
                    .properties_of(id)
                    .filter_map(|property| match &property.kind {
                        PropertyKind::Site(site) => Some(
                            i64::from(site.houses) * per_house
                                + if site.hotel { *per_hotel } else { 0 },
                        ),
                        _ => None,
                    })
                    .sum();
                if total > 0 {
                    self.alter_balance(id, -total)?;
                }
            }
        }
        Ok(())
    }

    fn other_active_players(&self, id: PlayerId) -> Vec<PlayerId> {
        self.active_players()
            .into_iter()
            .filter(|other| *other != id)
            .collect()
    }

    fn steps_to_nearest(&self, id: PlayerId, category: PropertyCategory) -> Result<i64, GameError> {
        let position = self.player(id)?.position;
        let board_len = self.board.len();
        let mut best: Option<i64> = None;
        for (index, square) in self.board.squares().iter().enumerate() {
            let Square::Property(name) = square else {
                continue;
            };
            if self.property(name)?.category() != category {
                continue;
            }
            let mut steps = steps_to(position, index, board_len);
            if steps == 0 {
                steps = board_len as i64;
            }
            if best.is_none_or(|current| steps < current) {
                best = Some(steps);
            }
        }
        best.ok_or_else(|| GameError::UnknownPlace(format!("nearest {category:?}")))
    }
}
