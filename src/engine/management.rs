use super::*;
use crate::constants::{MAX_HOUSES, UNMORTGAGE_INTEREST_PERCENT};
use crate::property::Site;

impl Game {
    pub fn build_house(&mut self, id: PlayerId, name: &str) -> Result<(), GameError> {
        let index = self.buildable_site(id, name)?;
        let player = self.player(id)?.name.clone();
        let site = self.site(index)?;
        if site.hotel {
            return Err(GameError::HotelPresent(name.to_string()));
        }
        if site.houses >= MAX_HOUSES {
            return Err(GameError::HouseLimit(name.to_string()));
        }
        let cost = site.house_cost;
        self.ensure_funds(id, cost)?;

        let site = self.site_mut(index)?;
        site.houses += 1;
        let houses = site.houses;
        self.push_event(GameEvent::HouseBuilt {
            player,
            property: name.to_string(),
            houses,
        });
        self.alter_balance(id, -cost)
    }

    pub fn build_hotel(&mut self, id: PlayerId, name: &str) -> Result<(), GameError> {
        let index = self.buildable_site(id, name)?;
        let player = self.player(id)?.name.clone();
        let site = self.site(index)?;
        if site.hotel {
            return Err(GameError::HotelPresent(name.to_string()));
        }
        if site.houses < MAX_HOUSES {
            return Err(GameError::HotelNeedsHouses(name.to_string()));
        }
        let cost = site.hotel_cost;
        self.ensure_funds(id, cost)?;

        let site = self.site_mut(index)?;
        site.houses = 0;
        site.hotel = true;
        self.push_event(GameEvent::HotelBuilt {
            player,
            property: name.to_string(),
        });
        self.alter_balance(id, -cost)
    }

    pub fn mortgage(&mut self, id: PlayerId, name: &str) -> Result<(), GameError> {
        let index = self.owned_property(id, name)?;
        let property = &self.properties[index];
        if property.mortgaged {
            return Err(GameError::Mortgaged(name.to_string()));
        }
        if let PropertyKind::Site(site) = &property.kind {
            if site.houses > 0 || site.hotel {
                return Err(GameError::ImprovementsPresent(name.to_string()));
            }
        }
        let amount = property.mortgage_amount;

        self.properties[index].mortgaged = true;
        let player = self.player(id)?.name.clone();
        self.push_event(GameEvent::PropertyMortgaged {
            player,
            property: name.to_string(),
            amount,
        });
        self.alter_balance(id, amount)
    }

    pub fn unmortgage(&mut self, id: PlayerId, name: &str) -> Result<(), GameError> {
        let index = self.owned_property(id, name)?;
        let property = &self.properties[index];
        if !property.mortgaged {
            return Err(GameError::NotMortgaged(name.to_string()));
        }
        let amount =
            property.mortgage_amount + property.mortgage_amount * UNMORTGAGE_INTEREST_PERCENT / 100;
        self.ensure_funds(id, amount)?;

        self.properties[index].mortgaged = false;
        let player = self.player(id)?.name.clone();
        self.push_event(GameEvent::PropertyUnmortgaged {
            player,
            property: name.to_string(),
            amount,
        });
        self.alter_balance(id, -amount)
    }

    pub fn improvable_sites(&self, id: PlayerId) -> Vec<String> {
        self.properties_of(id)
            .filter(|property| self.buildable_site(id, &property.name).is_ok())
            .filter_map(|property| match &property.kind {
                PropertyKind::Site(site) if !site.hotel => {
                    let cost = if site.houses < MAX_HOUSES {
                        site.house_cost
                    } else {
                        site.hotel_cost
                    };
                    self.ensure_funds(id, cost).ok()?;
                    Some(property.name.clone())
                }
                _ => None,
            })
            .collect()
    }

    fn owned_property(&self, id: PlayerId, name: &str) -> Result<usize, GameError> {
        let index = self.property_index(name)?;
        if !self.properties[index].is_owned_by(id) {
            return Err(GameError::NotOwner {
                player: self.player(id)?.name.clone(),
                property: name.to_string(),
            });
        }
        Ok(index)
    }

    fn buildable_site(&self, id: PlayerId, name: &str) -> Result<usize, GameError> {
        let index = self.owned_property(id, name)?;
        let property = &self.properties[index];
        let Some(color) = property.color() else {
            return Err(GameError::NotASite(name.to_string()));
        };
        if property.mortgaged {
            return Err(GameError::Mortgaged(name.to_string()));
        }
        if !owns_color_group(&self.properties, id, color) {
            return Err(GameError::NoMonopoly {
                player: self.player(id)?.name.clone(),
                property: name.to_string(),
            });
        }
        Ok(index)
    }

    fn ensure_funds(&self, id: PlayerId, amount: i64) -> Result<(), GameError> {
        let player = self.player(id)?;
        if player.balance > amount {
            return Ok(());
        }
        Err(GameError::InsufficientFunds {
            player: player.name.clone(),
            amount,
        })
    }

    fn site(&self, index: usize) -> Result<&Site, GameError> {
        let property = &self.properties[index];
        match &property.kind {
            PropertyKind::Site(site) => Ok(site),
            _ => Err(GameError::NotASite(property.name.clone())),
        }
    }

    fn site_mut(&mut self, index: usize) -> Result<&mut Site, GameError> {
        let property = &mut self.properties[index];
        match &mut property.kind {
            PropertyKind::Site(site) => Ok(site),
            _ => Err(GameError::NotASite(property.name.clone())),
        }
    }
}
