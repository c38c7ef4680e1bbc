//! Parts-per-10000 fixed-point ratios (10000 = 100.00%).

use primitive_types::U256;

pub const RATIO_BASE: u32 = 10_000;

/// `amount * ratio / 10000`, rounded down.
pub fn apply_ratio(amount: u128, ratio: u32) -> u128 {
    let scaled = U256::from(amount) * U256::from(ratio) / U256::from(RATIO_BASE);
    scaled.low_u128()
}

/// True when `word mod 10000` lands strictly below `ratio`.
///
/// A ratio of 0 never hits; a ratio of 10000 or more always hits.
pub fn roll_under_ratio(word: U256, ratio: u32) -> bool {
    let roll = (word % U256::from(RATIO_BASE)).low_u32();
    roll < ratio
}
