pub const BOARD_SIZE: usize = 40;

pub const STARTING_BALANCE: i64 = 15_000;
pub const COLLECT_FROM_GO: i64 = 2_000;
pub const INCOME_TAX: i64 = 2_000;
pub const SUPER_TAX: i64 = 1_000;
pub const BASE_TRANSPORT_RENT: i64 = 250;
pub const BASE_UTILITY_RENT: i64 = 10;
pub const MAX_PLAYERS: usize = 4;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_HOUSES: u8 = 4;
pub const UNMORTGAGE_INTEREST_PERCENT: i64 = 10;

pub const HOTEL_RENT_TIER: usize = 5;
pub const SINGLE_UTILITY_MULTIPLIER: i64 = 4;
pub const FULL_UTILITY_MULTIPLIER: i64 = 10;

pub fn get_bid_increments(price: i64) -> [i64; 4] {
    if price >= 2_500 {
        return [100, 250, 500, 1_000];
    }
    if price >= 1_500 {
        return [50, 100, 250, 500];
    }
    [20, 50, 100, 250]
}

pub fn get_utility_multiplier(owned: usize) -> i64 {
    if owned > 1 {
        return FULL_UTILITY_MULTIPLIER;
    }
    SINGLE_UTILITY_MULTIPLIER
}
