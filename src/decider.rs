use std::collections::VecDeque;

use crate::player::Player;
use crate::property::Property;
use crate::rng::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bid {
    Raise(i64),
    Withdraw,
}

pub trait Decider {
    fn wants_to_buy(&mut self, player: &Player, property: &Property) -> bool;

    fn confirm_purchase(&mut self, player: &Player, property: &Property) -> bool;

    fn bid(
        &mut self,
        bidder: &Player,
        property: &Property,
        current_bid: i64,
        increments: &[i64],
    ) -> Bid;
}

#[derive(Clone, Debug)]
pub struct GreedyDecider {
    rng: Rng,
    reserve: i64,
    aggression: f32,
}

impl GreedyDecider {
    pub fn new(seed: u32, reserve: i64) -> Self {
        Self {
            rng: Rng::new(seed),
            reserve,
            aggression: 0.2,
        }
    }
}

impl Decider for GreedyDecider {
    fn wants_to_buy(&mut self, player: &Player, property: &Property) -> bool {
        player.balance - property.price > self.reserve
    }

    fn confirm_purchase(&mut self, _player: &Player, _property: &Property) -> bool {
        true
    }

    fn bid(
        &mut self,
        bidder: &Player,
        property: &Property,
        current_bid: i64,
        increments: &[i64],
    ) -> Bid {
        let Some(&step) = increments.first() else {
            return Bid::Withdraw;
        };
        let next = current_bid + step;
        if bidder.balance - next <= self.reserve {
            return Bid::Withdraw;
        }
        if next <= property.price || self.rng.bool(self.aggression) {
            return Bid::Raise(step);
        }
        Bid::Withdraw
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedDecider {
    purchases: VecDeque<bool>,
    confirmations: VecDeque<bool>,
    bids: VecDeque<Bid>,
}

impl ScriptedDecider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_purchases(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.purchases.extend(answers);
        self
    }

    pub fn with_confirmations(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations.extend(answers);
        self
    }

    pub fn with_bids(mut self, bids: impl IntoIterator<Item = Bid>) -> Self {
        self.bids.extend(bids);
        self
    }

    pub fn remaining_bids(&self) -> usize {
        self.bids.len()
    }
}

impl Decider for ScriptedDecider {
    fn wants_to_buy(&mut self, _player: &Player, _property: &Property) -> bool {
        self.purchases.pop_front().unwrap_or(false)
    }

    fn confirm_purchase(&mut self, _player: &Player, _property: &Property) -> bool {
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn bid(
        &mut self,
        _bidder: &Player,
        _property: &Property,
        _current_bid: i64,
        _increments: &[i64],
    ) -> Bid {
        self.bids.pop_front().unwrap_or(Bid::Withdraw)
    }
}
