use super::Game;
use crate::board::{standard_board, standard_properties};
use crate::cards::{chance_cards, chest_cards, Card, Deck};
use crate::settings::Settings;
use crate::types::{DeckKind, PlayerId};

const NAMES: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

pub(super) fn make_game(players: usize) -> Game {
    make_game_with(players, Settings::default(), chance_cards(), chest_cards())
}

pub(super) fn make_game_with(
    players: usize,
    settings: Settings,
    chance: Vec<Card>,
    chest: Vec<Card>,
) -> Game {
    Game::with_parts(
        &NAMES[..players],
        settings,
        standard_board(),
        standard_properties(),
        Deck::new(DeckKind::Chance, chance),
        Deck::new(DeckKind::Chest, chest),
    )
    .expect("test roster is valid")
}

pub(super) fn own(game: &mut Game, owner: PlayerId, names: &[&str]) {
    for name in names {
        let index = game.property_index(name).expect("known property");
        game.properties[index].owner = Some(owner);
    }
}

pub(super) fn place(game: &Game, name: &str) -> usize {
    game.board.index_of(name).expect("known place")
}
