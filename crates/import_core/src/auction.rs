//! Copart/IAAI buyer fee schedule used when the user asks for an automatic fee.

/// `(upper_bound_usd, fee_usd)` in ascending order of upper bound.
pub const AUCTION_FEE_BRACKETS: [(f64, f64); 19] = [
    (100.0, 1.0),
    (499.0, 89.0),
    (999.0, 129.0),
    (1499.0, 179.0),
    (1999.0, 229.0),
    (2999.0, 279.0),
    (3999.0, 329.0),
    (4999.0, 379.0),
    (5999.0, 429.0),
    (6999.0, 479.0),
    (7999.0, 529.0),
    (8999.0, 579.0),
    (9999.0, 629.0),
    (14999.0, 729.0),
    (19999.0, 829.0),
    (29999.0, 979.0),
    (49999.0, 1279.0),
    (74999.0, 1579.0),
    (99999.0, 1879.0),
];

/// Fee charged above the last bracket.
pub const AUCTION_OVERFLOW_FEE: f64 = 2179.0;

/// Fee of the first bracket whose upper bound is at least `price_usd`.
pub fn lookup_auction_fee(price_usd: f64) -> f64 {
    AUCTION_FEE_BRACKETS
        .iter()
        .find(|(limit, _)| price_usd <= *limit)
        .map_or(AUCTION_OVERFLOW_FEE, |(_, fee)| *fee)
}
