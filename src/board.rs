use serde::Serialize;

use crate::constants::BOARD_SIZE;
use crate::error::GameError;
use crate::property::Property;
use crate::types::Color;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum Square {
    Go,
    Jail,
    GoToJail,
    Parking,
    Chance,
    Chest,
    IncomeTax,
    SuperTax,
    Property(String),
}

impl Square {
    pub fn name(&self) -> &str {
        match self {
            Self::Go => "Go",
            Self::Jail => "Jail",
            Self::GoToJail => "Go To Jail",
            Self::Parking => "Parking",
            Self::Chance => "Chance",
            Self::Chest => "Chest",
            Self::IncomeTax => "Income Tax",
            Self::SuperTax => "Super Tax",
            Self::Property(name) => name,
        }
    }
}

/// The circular sequence of squares. Index 0 is Go.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    pub fn new(squares: Vec<Square>) -> Self {
        Self { squares }
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn square(&self, index: usize) -> &Square {
        &self.squares[index % self.squares.len()]
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn index_of(&self, name: &str) -> Result<usize, GameError> {
        self.squares
            .iter()
            .position(|square| square.name() == name)
            .ok_or_else(|| GameError::UnknownPlace(name.to_string()))
    }
}

pub fn standard_board() -> Board {
    let prop = |name: &str| Square::Property(name.to_string());
    let squares = vec![
        Square::Go,
        prop("Gdynia"),
        Square::Chest,
        prop("Taipei"),
        Square::IncomeTax,
        prop("Monopoly Rail"),
        prop("Tokyo"),
        Square::Chance,
        prop("Barcelona"),
        prop("Athens"),
        Square::Jail,
        prop("Istambul"),
        prop("Solar Energy"),
        prop("Kiev"),
        prop("Toronto"),
        prop("Monopoly Air"),
        prop("Rome"),
        Square::Chest,
        prop("Shanghai"),
        prop("Vancouver"),
        Square::Parking,
        prop("Sydney"),
        Square::Chance,
        prop("New York"),
        prop("London"),
        prop("Monopoly Cruise"),
        prop("Beijing"),
        prop("Hong Kong"),
        prop("Wind Energy"),
        prop("Jerusalem"),
        Square::GoToJail,
        prop("Paris"),
        prop("Belgrade"),
        Square::Chest,
        prop("Cape Town"),
        prop("Monopoly Space"),
        Square::Chance,
        prop("Riga"),
        Square::SuperTax,
        prop("Montreal"),
    ];
    debug_assert_eq!(squares.len(), BOARD_SIZE);
    Board::new(squares)
}

pub fn standard_properties() -> Vec<Property> {
    use Color::*;

    vec![
        Property::site("Athens", 1200, LightBlue, [80, 400, 1000, 3000, 4500, 6000], 500),
        Property::site("Barcelona", 1000, LightBlue, [60, 300, 900, 2700, 4000, 5500], 500),
        Property::site("Beijing", 2600, Yellow, [220, 1100, 3300, 8000, 9750, 11500], 1500),
        Property::site("Belgrade", 3000, Green, [260, 1300, 3900, 9000, 11000, 12750], 2000),
        Property::site("Cape Town", 3200, Green, [280, 1500, 4500, 10000, 12000, 14000], 2000),
        Property::site("Gdynia", 600, Brown, [20, 100, 300, 900, 1600, 2500], 500),
        Property::site("Hong Kong", 2600, Yellow, [220, 1100, 3300, 8000, 9750, 11500], 3000),
        Property::site("Istambul", 1400, Pink, [100, 500, 1500, 4500, 6250, 7500], 1000),
        Property::site("Jerusalem", 2800, Yellow, [240, 1200, 3600, 8500, 10250, 12000], 1500),
        Property::site("Kiev", 1400, Pink, [100, 500, 1500, 4500, 6250, 7500], 1000),
        Property::site("London", 2400, Red, [200, 1000, 3000, 7500, 9250, 11000], 1500),
        Property::site("Montreal", 4000, Blue, [500, 2000, 6000, 14000, 17000, 20000], 2000),
        Property::site("New York", 2200, Red, [180, 900, 2500, 7000, 8750, 10500], 1500),
        Property::site("Paris", 3000, Green, [260, 1300, 3900, 9000, 11000, 12750], 2000),
        Property::site("Riga", 3500, Blue, [350, 1750, 5000, 11000, 13000, 15000], 2000),
        Property::site("Rome", 1800, Orange, [140, 700, 2000, 5500, 7500, 9500], 1000),
        Property::site("Shanghai", 1800, Orange, [140, 700, 2000, 5500, 7500, 9500], 1000),
        Property::site("Sydney", 2200, Red, [180, 900, 2500, 7000, 8750, 10500], 1500),
        Property::site("Taipei", 600, Brown, [40, 200, 600, 1800, 3200, 4500], 500),
        Property::site("Tokyo", 1000, LightBlue, [60, 300, 900, 2700, 4000, 5500], 500),
        Property::site("Toronto", 1600, Pink, [120, 600, 1800, 5000, 7000, 9000], 1000),
        Property::site("Vancouver", 2000, Orange, [160, 800, 2200, 6000, 8000, 10000], 1000),
        Property::transport("Monopoly Air", 2000),
        Property::transport("Monopoly Cruise", 2000),
        Property::transport("Monopoly Rail", 2000),
        Property::transport("Monopoly Space", 2000),
        Property::utility("Solar Energy", 1500),
        Property::utility("Wind Energy", 1500),
    ]
}
