use tracing::info;

use super::*;
use crate::constants::get_bid_increments;
use crate::decider::{Bid, Decider};

impl Game {
    pub fn negotiate(
        &mut self,
        id: PlayerId,
        index: usize,
        decider: &mut dyn Decider,
    ) -> Result<(), GameError> {
        let property = self
            .properties
            .get(index)
            .ok_or_else(|| GameError::UnknownProperty(format!("#{index}")))?;

        if !self.settings.always_auction {
            let player = self.player(id)?;
            if decider.wants_to_buy(player, property) && decider.confirm_purchase(player, property)
            {
                let (name, price) = (property.name.clone(), property.price);
                if player.balance > price {
                    let buyer = player.name.clone();
                    self.properties[index].owner = Some(id);
                    self.push_event(GameEvent::PropertyBought {
                        player: buyer,
                        property: name,
                        price,
                    });
                    return self.alter_balance(id, -price);
                }
                let buyer = player.name.clone();
                self.push_event(GameEvent::PurchaseFailed {
                    player: buyer,
                    property: name,
                    price,
                });
            }
        }

        self.run_auction(index, decider).map(|_| ())
    }

    pub fn run_auction(
        &mut self,
        index: usize,
        decider: &mut dyn Decider,
    ) -> Result<Option<PlayerId>, GameError> {
        let property = self
            .properties
            .get(index)
            .ok_or_else(|| GameError::UnknownProperty(format!("#{index}")))?;
        let (name, price) = (property.name.clone(), property.price);
        let increments = get_bid_increments(price);
        self.push_event(GameEvent::AuctionStarted {
            property: name.clone(),
            increments,
        });

        let mut bidders = self.active_players();
        if bidders.is_empty() {
            return Ok(None);
        }
        if let [only] = bidders.as_slice() {
            let winner = *only;
            self.award(index, winner, price)?;
            return Ok(Some(winner));
        }

        let mut current_bid = 0;
        let mut leader: Option<PlayerId> = None;
        let mut turn = 0;
        while bidders.len() > 1 {
            turn %= bidders.len();
            let bidder = bidders[turn];
            if leader == Some(bidder) {
                turn += 1;
                continue;
            }

            let player = self.player(bidder)?;
            let choice = decider.bid(player, &self.properties[index], current_bid, &increments);
            match choice {
                Bid::Raise(step)
                    if increments.contains(&step) && player.balance > current_bid + step =>
                {
                    current_bid += step;
                    leader = Some(bidder);
                    let event = GameEvent::BidPlaced {
                        player: player.name.clone(),
                        property: name.clone(),
                        amount: current_bid,
                    };
                    self.push_event(event);
                    turn += 1;
                }
                _ => {
                    let event = GameEvent::BidWithdrawn {
                        player: player.name.clone(),
                        property: name.clone(),
                    };
                    self.push_event(event);
                    bidders.remove(turn);
                }
            }
        }

        let winner = bidders[0];
        if leader.is_none() {
            let opening = increments[0];
            if self.player(winner)?.balance <= opening {
                info!("{name} stays with the bank, no affordable bid");
                return Ok(None);
            }
            self.award(index, winner, opening)?;
            return Ok(Some(winner));
        }
        self.award(index, winner, current_bid)?;
        Ok(Some(winner))
    }

    fn award(&mut self, index: usize, winner: PlayerId, amount: i64) -> Result<(), GameError> {
        let player = self.player(winner)?.name.clone();
        self.properties[index].owner = Some(winner);
        let property = self.properties[index].name.clone();
        self.push_event(GameEvent::AuctionWon {
            player,
            property,
            amount,
        });
        self.alter_balance(winner, -amount)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{make_game, make_game_with};
    use crate::cards::{chance_cards, chest_cards};
    use crate::decider::{Bid, ScriptedDecider};
    use crate::settings::Settings;
    use crate::types::GameEvent;

    fn index_of(game: &crate::engine::Game, name: &str) -> usize {
        game.property_index(name).expect("known property")
    }

    #[test]
    fn confirmed_purchase_transfers_ownership() {
        let mut game = make_game(2);
        let athens = index_of(&game, "Athens");
        let mut decider = ScriptedDecider::new()
            .with_purchases([true])
            .with_confirmations([true]);

        game.negotiate(0, athens, &mut decider).expect("negotiation resolves");

        assert_eq!(game.properties[athens].owner, Some(0));
        assert_eq!(game.players[0].balance, 15_000 - 1_200);
    }

    #[test]
    fn unaffordable_purchase_falls_through_to_auction() {
        let mut game = make_game(3);
        let athens = index_of(&game, "Athens");
        game.players[0].balance = 1_000;
        // Alice confirms but cannot pay. In the auction Alice bids 20, Bob
        // raises by 50, Carol withdraws, Alice withdraws; Bob wins at 70.
        let mut decider = ScriptedDecider::new()
            .with_purchases([true])
            .with_confirmations([true])
            .with_bids([Bid::Raise(20), Bid::Raise(50), Bid::Withdraw, Bid::Withdraw]);

        game.negotiate(0, athens, &mut decider).expect("negotiation resolves");

        assert_eq!(game.properties[athens].owner, Some(1));
        assert_eq!(game.players[1].balance, 15_000 - 70);
        assert_eq!(game.players[0].balance, 1_000);
        assert_eq!(decider.remaining_bids(), 0);

        let events = game.drain_events();
        assert!(events
            .iter()
            .any(|event| matches!(event, GameEvent::PurchaseFailed { .. })));
        assert!(events.iter().any(|event| matches!(
            event,
            GameEvent::AuctionWon { amount: 70, .. }
        )));
    }

    #[test]
    fn declined_purchase_starts_auction() {
        let mut game = make_game(2);
        let rome = index_of(&game, "Rome");
        let mut decider = ScriptedDecider::new()
            .with_purchases([false])
            .with_bids([Bid::Raise(500), Bid::Raise(100), Bid::Raise(500), Bid::Withdraw]);

        game.negotiate(1, rome, &mut decider).expect("negotiation resolves");

        assert_eq!(game.properties[rome].owner, Some(0));
        assert_eq!(game.players[0].balance, 15_000 - 1_100);
        assert_eq!(game.players[1].balance, 15_000);
    }

    #[test]
    fn always_auction_skips_the_offer() {
        let settings = Settings {
            always_auction: true,
            ..Settings::default()
        };
        let mut game = make_game_with(2, settings, chance_cards(), chest_cards());
        let athens = index_of(&game, "Athens");
        let mut decider = ScriptedDecider::new()
            .with_purchases([true])
            .with_confirmations([true])
            .with_bids([Bid::Withdraw]);

        game.negotiate(0, athens, &mut decider).expect("negotiation resolves");

        // Bob was the last bidder left and pays the opening increment.
        assert_eq!(game.properties[athens].owner, Some(1));
        assert_eq!(game.players[1].balance, 15_000 - 20);
        assert_eq!(game.players[0].balance, 15_000);
    }

    #[test]
    fn invalid_or_unaffordable_raise_counts_as_withdrawal() {
        let mut game = make_game(3);
        let athens = index_of(&game, "Athens");
        game.players[0].balance = 30;
        let mut decider = ScriptedDecider::new().with_bids([Bid::Raise(50), Bid::Raise(33)]);

        let winner = game.run_auction(athens, &mut decider).expect("auction resolves");

        assert_eq!(winner, Some(2));
        assert_eq!(game.players[2].balance, 15_000 - 20);
        assert_eq!(game.players[0].balance, 30);
    }

    #[test]
    fn unbid_property_stays_with_bank_when_last_bidder_is_broke() {
        let mut game = make_game(2);
        let athens = index_of(&game, "Athens");
        game.players[1].balance = 10;
        let mut decider = ScriptedDecider::new().with_bids([Bid::Withdraw]);

        let winner = game.run_auction(athens, &mut decider).expect("auction resolves");

        assert_eq!(winner, None);
        assert_eq!(game.properties[athens].owner, None);
        assert_eq!(game.players[1].balance, 10);
        assert!(!game.players[1].bankrupt);
        assert!(!game
            .drain_events()
            .iter()
            .any(|event| matches!(event, GameEvent::AuctionWon { .. })));
    }

    #[test]
    fn sole_active_player_pays_listed_price() {
        let mut game = make_game(3);
        game.players[1].bankrupt = true;
        game.players[2].bankrupt = true;
        let riga = index_of(&game, "Riga");

        let winner = game
            .run_auction(riga, &mut ScriptedDecider::new())
            .expect("auction resolves");

        assert_eq!(winner, Some(0));
        assert_eq!(game.players[0].balance, 15_000 - 3_500);
    }

    #[test]
    fn leader_is_not_asked_to_outbid_themselves() {
        let mut game = make_game(3);
        let montreal = index_of(&game, "Montreal");
        // Alice leads at 100; Bob and Carol withdraw. Alice is never asked again.
        let mut decider = ScriptedDecider::new().with_bids([
            Bid::Raise(100),
            Bid::Withdraw,
            Bid::Withdraw,
            Bid::Raise(1_000),
        ]);

        let winner = game
            .run_auction(montreal, &mut decider)
            .expect("auction resolves");

        assert_eq!(winner, Some(0));
        assert_eq!(game.players[0].balance, 15_000 - 100);
        assert_eq!(decider.remaining_bids(), 1);
    }
}
