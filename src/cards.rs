use std::collections::VecDeque;

use serde::Serialize;

use crate::error::GameError;
use crate::rng::Rng;
use crate::types::{DeckKind, PropertyCategory};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardEffect {
    MoveTo { place: String, collect: bool },
    MoveBy { steps: i64 },
    AdvanceToNearest { category: PropertyCategory },
    AlterBalance { amount: i64 },
    TransferToAll { amount: i64 },
    CollectFromAll { amount: i64 },
    GrantJailCard,
    ArrestPlayer,
    TaxByImprovements { per_house: i64, per_hotel: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub description: String,
    pub effect: CardEffect,
}

impl Card {
    pub fn new(description: &str, effect: CardEffect) -> Self {
        Self {
            description: description.to_string(),
            effect,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Deck {
    kind: DeckKind,
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new(kind: DeckKind, cards: Vec<Card>) -> Self {
        Self {
            kind,
            cards: cards.into(),
        }
    }

    pub fn shuffled(kind: DeckKind, mut cards: Vec<Card>, rng: &mut Rng) -> Self {
        rng.shuffle(&mut cards);
        Self::new(kind, cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self
            .cards
            .pop_front()
            .ok_or(GameError::EmptyDeck(self.kind))?;
        self.cards.push_back(card.clone());
        Ok(card)
    }
}

const PASS_GO: &str = "If you pass Go, collect 2M.";

pub fn chance_cards() -> Vec<Card> {
    use CardEffect::*;

    let nearest_transport = format!(
        "Advance to the nearest Transport. If unowned, you may buy it from the Bank. \
         If owned, pay owner the rental to which they are entitled. {PASS_GO}"
    );
    let nearest_utility = format!(
        "Advance to the nearest Utility. If unowned, you may buy it from the Bank. \
         If owned, pay owner the rental for the dice thrown. {PASS_GO}"
    );

    vec![
        Card::new(
            "Advance to Go. Collect 2M.",
            MoveTo {
                place: "Go".to_string(),
                collect: true,
            },
        ),
        Card::new(
            &format!("Advance to Istambul. {PASS_GO}"),
            MoveTo {
                place: "Istambul".to_string(),
                collect: true,
            },
        ),
        Card::new(
            &format!("Advance to London. {PASS_GO}"),
            MoveTo {
                place: "London".to_string(),
                collect: true,
            },
        ),
        Card::new(
            "Advance to Montreal.",
            MoveTo {
                place: "Montreal".to_string(),
                collect: false,
            },
        ),
        Card::new(
            &format!("Advance to the Monopoly Rail Transport. {PASS_GO}"),
            MoveTo {
                place: "Monopoly Rail".to_string(),
                collect: true,
            },
        ),
        Card::new(
            &nearest_transport,
            AdvanceToNearest {
                category: PropertyCategory::Transport,
            },
        ),
        Card::new(
            &nearest_transport,
            AdvanceToNearest {
                category: PropertyCategory::Transport,
            },
        ),
        Card::new(
            &nearest_utility,
            AdvanceToNearest {
                category: PropertyCategory::Utility,
            },
        ),
        Card::new("Collect 500K.", AlterBalance { amount: 500 }),
        Card::new("Collect 1.5M.", AlterBalance { amount: 1_500 }),
        Card::new(
            "For each house pay 250K, for each hotel pay 1M.",
            TaxByImprovements {
                per_house: 250,
                per_hotel: 1_000,
            },
        ),
        Card::new("Get out of Jail free.", GrantJailCard),
        Card::new("Go back 3 spaces.", MoveBy { steps: -3 }),
        Card::new(
            "Go directly to Jail. Do not pass Go, do not collect 2M.",
            ArrestPlayer,
        ),
        Card::new("Pay 150K.", AlterBalance { amount: -150 }),
        Card::new("Pay each player 500K.", TransferToAll { amount: 500 }),
    ]
}

pub fn chest_cards() -> Vec<Card> {
    use CardEffect::*;

    vec![
        Card::new(
            "Advance to Go. Collect 2M.",
            MoveTo {
                place: "Go".to_string(),
                collect: true,
            },
        ),
        Card::new(
            "Collect 100K from each player.",
            CollectFromAll { amount: 100 },
        ),
        Card::new("Collect 100K.", AlterBalance { amount: 100 }),
        Card::new("Collect 100K.", AlterBalance { amount: 100 }),
        Card::new("Collect 200K.", AlterBalance { amount: 200 }),
        Card::new("Collect 250K.", AlterBalance { amount: 250 }),
        Card::new("Collect 500K.", AlterBalance { amount: 500 }),
        Card::new("Collect 1M.", AlterBalance { amount: 1_000 }),
        Card::new("Collect 1M.", AlterBalance { amount: 1_000 }),
        Card::new("Collect 2M.", AlterBalance { amount: 2_000 }),
        Card::new(
            "For each house pay 400K, for each hotel pay 1.15M.",
            TaxByImprovements {
                per_house: 400,
                per_hotel: 1_150,
            },
        ),
        Card::new("Get out of Jail free.", GrantJailCard),
        Card::new(
            "Go directly to Jail. Do not pass Go, do not collect 2M.",
            ArrestPlayer,
        ),
        Card::new("Pay 500K.", AlterBalance { amount: -500 }),
        Card::new("Pay 1M.", AlterBalance { amount: -1_000 }),
    ]
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{chance_cards, chest_cards, Card, CardEffect, Deck};
    use crate::board::standard_board;
    use crate::error::GameError;
    use crate::rng::Rng;
    use crate::types::DeckKind;

    fn numbered_deck(size: usize) -> Deck {
        let cards = (0..size)
            .map(|i| Card::new(&format!("card {i}"), CardEffect::AlterBalance { amount: i as i64 }))
            .collect();
        Deck::new(DeckKind::Chance, cards)
    }

    #[test]
    fn standard_decks_have_fixed_sizes() {
        assert_eq!(chance_cards().len(), 16);
        assert_eq!(chest_cards().len(), 15);
    }

    #[test]
    fn every_named_destination_is_on_the_board() {
        let board = standard_board();
        for card in chance_cards().into_iter().chain(chest_cards()) {
            if let CardEffect::MoveTo { place, .. } = &card.effect {
                assert!(board.index_of(place).is_ok(), "{place} missing from board");
            }
        }
    }

    #[test]
    fn empty_deck_is_an_invariant_violation() {
        let mut deck = Deck::new(DeckKind::Chest, Vec::new());
        assert!(matches!(
            deck.draw(),
            Err(GameError::EmptyDeck(DeckKind::Chest))
        ));
    }

    #[test]
    fn shuffled_deck_keeps_its_size() {
        let mut rng = Rng::new(11);
        let deck = Deck::shuffled(DeckKind::Chance, chance_cards(), &mut rng);
        assert_eq!(deck.len(), 16);
    }

    proptest! {
        #[test]
        fn full_cycle_returns_every_card_in_order(size in 1usize..40) {
            let mut deck = numbered_deck(size);
            let before: Vec<Card> = deck.cards().cloned().collect();

            let drawn: Vec<Card> = (0..size)
                .map(|_| deck.draw().expect("deck is never empty"))
                .collect();

            prop_assert_eq!(&drawn, &before);
            let after: Vec<Card> = deck.cards().cloned().collect();
            prop_assert_eq!(after, before);
        }

        #[test]
        fn draws_repeat_with_period_of_deck_size(size in 1usize..20, offset in 0usize..60) {
            let mut deck = numbered_deck(size);
            for _ in 0..offset {
                deck.draw().expect("deck is never empty");
            }
            let first = deck.draw().expect("deck is never empty");
            for _ in 0..size - 1 {
                deck.draw().expect("deck is never empty");
            }
            let again = deck.draw().expect("deck is never empty");
            prop_assert_eq!(first, again);
        }
    }
}
