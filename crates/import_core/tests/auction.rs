use import_core::{lookup_auction_fee, AUCTION_FEE_BRACKETS, AUCTION_OVERFLOW_FEE};

#[test]
fn every_price_in_a_bracket_gets_its_fee() {
    let mut lower = 0.0;
    for (upper, fee) in AUCTION_FEE_BRACKETS {
        for price in [lower, (lower + upper) / 2.0, upper] {
            assert_eq!(
                lookup_auction_fee(price),
                fee,
                "price {price} should fall in the bracket ending at {upper}"
            );
        }
        lower = upper + 0.01;
    }
}

#[test]
fn brackets_are_strictly_ascending() {
    let limits: Vec<f64> = AUCTION_FEE_BRACKETS.iter().map(|(limit, _)| *limit).collect();
    assert!(limits.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn prices_above_the_last_bracket_pay_the_overflow_fee() {
    assert_eq!(lookup_auction_fee(99_999.5), AUCTION_OVERFLOW_FEE);
    assert_eq!(lookup_auction_fee(100_000.0), 2179.0);
    assert_eq!(lookup_auction_fee(1_000_000.0), 2179.0);
}

#[test]
fn known_points() {
    assert_eq!(lookup_auction_fee(100.0), 1.0);
    assert_eq!(lookup_auction_fee(100.5), 89.0);
    assert_eq!(lookup_auction_fee(8500.0), 579.0);
    assert_eq!(lookup_auction_fee(9000.0), 629.0);
}
