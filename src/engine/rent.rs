use crate::constants::{get_utility_multiplier, HOTEL_RENT_TIER, MAX_HOUSES};
use crate::property::{Property, PropertyKind};
use crate::settings::Settings;
use crate::types::{Color, PlayerId, PropertyCategory};

pub fn owns_color_group(properties: &[Property], owner: PlayerId, color: Color) -> bool {
    properties
        .iter()
        .filter(|property| property.color() == Some(color))
        .all(|property| property.is_owned_by(owner))
}

pub fn count_owned(properties: &[Property], owner: PlayerId, category: PropertyCategory) -> usize {
    properties
        .iter()
        .filter(|property| property.category() == category && property.is_owned_by(owner))
        .count()
}

pub fn rent_owed(
    properties: &[Property],
    owner: PlayerId,
    property: &Property,
    dice_total: u32,
    settings: &Settings,
) -> i64 {
    match &property.kind {
        PropertyKind::Site(site) => {
            if site.hotel {
                return site.rent[HOTEL_RENT_TIER];
            }
            if site.houses > 0 {
                return site.rent[usize::from(site.houses.min(MAX_HOUSES))];
            }
            let base = site.rent[0];
            if owns_color_group(properties, owner, site.color) {
                base * 2
            } else {
                base
            }
        }
        PropertyKind::Transport => {
            let owned = count_owned(properties, owner, PropertyCategory::Transport);
            settings.base_transport_rent << owned.saturating_sub(1)
        }
        PropertyKind::Utility => {
            let owned = count_owned(properties, owner, PropertyCategory::Utility);
            settings.base_utility_rent * get_utility_multiplier(owned) * i64::from(dice_total)
        }
    }
}
