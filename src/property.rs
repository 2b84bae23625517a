use serde::Serialize;

use crate::types::{Color, PlayerId, PropertyCategory};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Site {
    pub color: Color,
    pub houses: u8,
    pub hotel: bool,
    /// Base rent, rent with one to four houses, rent with a hotel.
    pub rent: [i64; 6],
    #[serde(rename = "houseCost")]
    pub house_cost: i64,
    #[serde(rename = "hotelCost")]
    pub hotel_cost: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyKind {
    Site(Site),
    Transport,
    Utility,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub price: i64,
    #[serde(rename = "mortgageAmount")]
    pub mortgage_amount: i64,
    pub mortgaged: bool,
    pub owner: Option<PlayerId>,
    pub kind: PropertyKind,
}

impl Property {
    pub fn site(name: &str, price: i64, color: Color, rent: [i64; 6], house_cost: i64) -> Self {
        Self::with_kind(
            name,
            price,
            PropertyKind::Site(Site {
                color,
                houses: 0,
                hotel: false,
                rent,
                house_cost,
                hotel_cost: house_cost,
            }),
        )
    }

    pub fn transport(name: &str, price: i64) -> Self {
        Self::with_kind(name, price, PropertyKind::Transport)
    }

    pub fn utility(name: &str, price: i64) -> Self {
        Self::with_kind(name, price, PropertyKind::Utility)
    }

    fn with_kind(name: &str, price: i64, kind: PropertyKind) -> Self {
        Self {
            name: name.to_string(),
            price,
            mortgage_amount: price / 2,
            mortgaged: false,
            owner: None,
            kind,
        }
    }

    pub fn category(&self) -> PropertyCategory {
        match self.kind {
            PropertyKind::Site(_) => PropertyCategory::Site,
            PropertyKind::Transport => PropertyCategory::Transport,
            PropertyKind::Utility => PropertyCategory::Utility,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match &self.kind {
            PropertyKind::Site(site) => Some(site.color),
            _ => None,
        }
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    pub fn release(&mut self) {
        self.owner = None;
        self.mortgaged = false;
        if let PropertyKind::Site(site) = &mut self.kind {
            site.houses = 0;
            site.hotel = false;
        }
    }
}
