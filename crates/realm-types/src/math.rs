//! Integer geometry for ring allocation.

/// Integer square root (floor) by Newton's method.
///
/// `isqrt(0) == 0` and `isqrt(1..=3) == 1` are explicit base cases; for larger
/// inputs the iteration starts at `x / 2 + 1` and decreases monotonically
/// until it stops improving.
pub fn isqrt(x: u128) -> u128 {
    if x == 0 {
        return 0;
    }
    if x <= 3 {
        return 1;
    }
    let mut z = x;
    let mut y = x / 2 + 1;
    while y < z {
        z = y;
        y = (x / y + y) / 2;
    }
    z
}

/// Ring id for a point at `(distance_x, distance_y)` from the origin:
/// `floor(isqrt(dx² + dy²) / distance_unit)`.
///
/// Returns `None` when `distance_unit` is zero (constants not initialised).
/// The squared distance saturates at `u128::MAX`.
pub fn ring_number(distance_x: u64, distance_y: u64, distance_unit: u64) -> Option<u64> {
    if distance_unit == 0 {
        return None;
    }
    let dx = distance_x as u128;
    let dy = distance_y as u128;
    let squared = (dx * dx).saturating_add(dy * dy);
    let distance = isqrt(squared);
    Some((distance / distance_unit as u128) as u64)
}

/// Town capacity of a ring that has not been minted yet:
/// `origin_town_limit * (ring_id² + 2·ring_id)`, saturating at `u64::MAX`.
///
/// `origin_town_limit` is the stored limit of ring 1.
pub fn virtual_town_limit(origin_town_limit: u64, ring_id: u64) -> u64 {
    let id = ring_id as u128;
    let growth = id.saturating_mul(id).saturating_add(id.saturating_mul(2));
    let limit = (origin_town_limit as u128).saturating_mul(growth);
    u64::try_from(limit).unwrap_or(u64::MAX)
}
