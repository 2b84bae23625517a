use tracing::info;

use super::*;
use crate::decider::Decider;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub dice_total: u32,
    pub start: usize,
    pub landed: usize,
    pub end: usize,
    pub resolutions: u8,
    pub bankrupt: bool,
}

impl Game {
    /// Moves the player by the dice and resolves where they end up. A second
    /// resolution runs only if the first one moved the player again.
    pub fn play_roll(
        &mut self,
        id: PlayerId,
        dice_total: u32,
        decider: &mut dyn Decider,
    ) -> Result<TurnOutcome, GameError> {
        let start = self.player(id)?.position;
        let landed = self
            .move_player(id, Destination::Steps(i64::from(dice_total)), true)?
            .to;

        self.on_arrival(id, dice_total, decider)?;
        let mut resolutions = 1;

        let player = self.player(id)?;
        if player.position != landed && !player.bankrupt {
            self.on_arrival(id, dice_total, decider)?;
            resolutions += 1;
        }

        let player = self.player(id)?;
        Ok(TurnOutcome {
            dice_total,
            start,
            landed,
            end: player.position,
            resolutions,
            bankrupt: player.bankrupt,
        })
    }

    pub fn on_arrival(
        &mut self,
        id: PlayerId,
        dice_total: u32,
        decider: &mut dyn Decider,
    ) -> Result<(), GameError> {
        let player = self.player(id)?;
        if player.bankrupt {
            return Ok(());
        }
        let square = self.board.square(player.position).clone();
        let name = player.name.clone();
        self.push_event(GameEvent::Arrived {
            player: name,
            place: square.name().to_string(),
        });

        match &square {
            Square::Go | Square::Jail | Square::Parking => {}
            Square::GoToJail => self.arrest_player(id)?,
            Square::Chance => {
                self.apply_card(id, DeckKind::Chance)?;
            }
            Square::Chest => {
                self.apply_card(id, DeckKind::Chest)?;
            }
            Square::IncomeTax => self.pay_tax(id, &square, self.settings.income_tax)?,
            Square::SuperTax => self.pay_tax(id, &square, self.settings.super_tax)?,
            Square::Property(property) => {
                self.resolve_property(id, property, dice_total, decider)?
            }
        }
        Ok(())
    }

    fn pay_tax(&mut self, id: PlayerId, square: &Square, amount: i64) -> Result<(), GameError> {
        let name = self.player(id)?.name.clone();
        self.push_event(GameEvent::TaxPaid {
            player: name,
            place: square.name().to_string(),
            amount,
        });
        self.alter_balance(id, -amount)
    }

    fn resolve_property(
        &mut self,
        id: PlayerId,
        name: &str,
        dice_total: u32,
        decider: &mut dyn Decider,
    ) -> Result<(), GameError> {
        let index = self.property_index(name)?;
        let property = &self.properties[index];
        let owner = match property.owner {
            None => return self.negotiate(id, index, decider),
            Some(owner) if owner == id => return Ok(()),
            Some(owner) => owner,
        };
        if property.mortgaged {
            info!("{name} is mortgaged, no rent is due");
            return Ok(());
        }

        let amount = rent_owed(&self.properties, owner, property, dice_total, &self.settings);
        let event = GameEvent::RentPaid {
            from: self.player(id)?.name.clone(),
            to: self.player(owner)?.name.clone(),
            property: name.to_string(),
            amount,
        };
        self.push_event(event);
        self.transfer(id, owner, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{make_game, make_game_with, own, place};
    use crate::cards::{Card, CardEffect};
    use crate::decider::{Bid, ScriptedDecider};
    use crate::settings::Settings;
    use crate::types::GameEvent;

    #[test]
    fn landing_on_owned_site_pays_rent() {
        let mut game = make_game(2);
        own(&mut game, 1, &["Tokyo"]);
        let mut decider = ScriptedDecider::new();

        let outcome = game.play_roll(0, 6, &mut decider).expect("turn resolves");

        assert_eq!(outcome.end, place(&game, "Tokyo"));
        assert_eq!(game.players[0].balance, 15_000 - 60);
        assert_eq!(game.players[1].balance, 15_000 + 60);
    }

    #[test]
    fn unaffordable_landing_goes_to_auction() {
        let mut game = make_game(2);
        game.players[0].balance = 1_000;
        // Alice confirms Athens at 1200 but cannot pay. Alice bids 20, Bob
        // raises by 50, Alice withdraws.
        let mut decider = ScriptedDecider::new()
            .with_purchases([true])
            .with_confirmations([true])
            .with_bids([Bid::Raise(20), Bid::Raise(50), Bid::Withdraw]);

        let outcome = game.play_roll(0, 9, &mut decider).expect("turn resolves");

        let athens = place(&game, "Athens");
        assert_eq!(outcome.end, athens);
        assert_eq!(game.property("Athens").expect("known property").owner, Some(1));
        assert_eq!(game.players[1].balance, 15_000 - 70);
        assert_eq!(game.players[0].balance, 1_000);

        let events = game.drain_events();
        assert!(events
            .iter()
            .any(|event| matches!(event, GameEvent::PurchaseFailed { price: 1_200, .. })));
        assert!(events.iter().any(|event| matches!(
            event,
            GameEvent::AuctionWon { amount: 70, .. }
        )));
    }

    #[test]
    fn own_property_costs_nothing() {
        let mut game = make_game(2);
        own(&mut game, 0, &["Tokyo"]);
        game.play_roll(0, 6, &mut ScriptedDecider::new())
            .expect("turn resolves");
        assert_eq!(game.players[0].balance, 15_000);
    }

    #[test]
    fn mortgaged_property_collects_no_rent() {
        let mut game = make_game(2);
        own(&mut game, 1, &["Tokyo"]);
        let index = game.property_index("Tokyo").expect("known property");
        game.properties[index].mortgaged = true;
        game.play_roll(0, 6, &mut ScriptedDecider::new())
            .expect("turn resolves");
        assert_eq!(game.players[0].balance, 15_000);
    }

    #[test]
    fn utility_rent_uses_the_dice() {
        let mut game = make_game(2);
        own(&mut game, 1, &["Solar Energy"]);
        game.players[0].position = 4;
        game.play_roll(0, 8, &mut ScriptedDecider::new())
            .expect("turn resolves");
        assert_eq!(game.players[0].balance, 15_000 - 10 * 4 * 8);
    }

    #[test]
    fn income_tax_is_deducted() {
        let mut game = make_game(2);
        game.play_roll(0, 4, &mut ScriptedDecider::new())
            .expect("turn resolves");
        assert_eq!(game.players[0].balance, 13_000);
    }

    #[test]
    fn super_tax_can_bankrupt() {
        let mut game = make_game(2);
        game.players[0].position = 30;
        game.players[0].balance = 900;
        let outcome = game
            .play_roll(0, 8, &mut ScriptedDecider::new())
            .expect("turn resolves");
        assert!(outcome.bankrupt);
        assert_eq!(game.players[0].balance, -100);
    }

    #[test]
    fn go_to_jail_skips_go_bonus() {
        let mut game = make_game(2);
        game.players[0].position = 25;
        let outcome = game
            .play_roll(0, 5, &mut ScriptedDecider::new())
            .expect("turn resolves");
        assert_eq!(outcome.landed, 30);
        assert_eq!(outcome.end, place(&game, "Jail"));
        assert_eq!(outcome.resolutions, 2);
        assert_eq!(game.players[0].balance, 15_000);
    }

    #[test]
    fn card_move_gets_one_more_resolution() {
        let mut game = make_game_with(
            2,
            Settings::default(),
            vec![Card::new(
                "Advance to Montreal.",
                CardEffect::MoveTo {
                    place: "Montreal".to_string(),
                    collect: false,
                },
            )],
            vec![Card::new("Collect 100K.", CardEffect::AlterBalance { amount: 100 })],
        );
        own(&mut game, 1, &["Montreal"]);

        let outcome = game
            .play_roll(0, 7, &mut ScriptedDecider::new())
            .expect("turn resolves");

        assert_eq!(outcome.landed, place(&game, "Chance"));
        assert_eq!(outcome.end, place(&game, "Montreal"));
        assert_eq!(outcome.resolutions, 2);
        assert_eq!(game.players[0].balance, 15_000 - 500);
    }

    #[test]
    fn chained_card_squares_resolve_only_once_more() {
        let mut game = make_game_with(
            2,
            Settings::default(),
            vec![Card::new(
                "Advance to Montreal.",
                CardEffect::MoveTo {
                    place: "Montreal".to_string(),
                    collect: false,
                },
            )],
            vec![Card::new(
                "Advance to Chance.",
                CardEffect::MoveTo {
                    place: "Chance".to_string(),
                    collect: false,
                },
            )],
        );
        own(&mut game, 1, &["Montreal"]);

        let outcome = game
            .play_roll(0, 2, &mut ScriptedDecider::new())
            .expect("turn resolves");

        assert_eq!(outcome.landed, 2);
        assert_eq!(outcome.end, place(&game, "Montreal"));
        assert_eq!(outcome.resolutions, 2);
        assert_eq!(game.players[0].balance, 15_000);
        assert_eq!(game.players[1].balance, 15_000);
    }

    #[test]
    fn arrival_is_narrated() {
        let mut game = make_game(2);
        game.play_roll(0, 20, &mut ScriptedDecider::new())
            .expect("turn resolves");
        let events = game.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            GameEvent::Arrived { place, .. } if place == "Parking"
        )));
    }
}
