//! Exact integer percentage arithmetic on prices.

use paddock_core::event::PriceMoveCause;
use paddock_core::price::Price;

const ONE_UNIT: u128 = 1_000_000_000_000_000_000;

#[test]
fn overtake_boost_on_one_unit() {
    let after = PriceMoveCause::Overtake.apply(Price::new(ONE_UNIT));
    assert_eq!(after, Price::new(1_100_000_000_000_000_000));
}

#[test]
fn crash_cut_on_one_unit() {
    let after = PriceMoveCause::Crash.apply(Price::new(ONE_UNIT));
    assert_eq!(after, Price::new(800_000_000_000_000_000));
}

#[test]
fn finish_bonus_on_one_unit() {
    let after = PriceMoveCause::Finish.apply(Price::new(ONE_UNIT));
    assert_eq!(after, Price::new(1_050_000_000_000_000_000));
}

#[test]
fn percentage_math_floors() {
    // 10% of 333 is 33.3 → floor to 33.
    assert_eq!(Price::new(333).add_pct(10), Price::new(366));
    // 20% of 10 is 2 exactly.
    assert_eq!(Price::new(10).sub_pct(20), Price::new(8));
    // 20% of 3 floors to 0 wei: the cut is a no-op, not a negative.
    assert_eq!(Price::new(3).sub_pct(20), Price::new(3));
    assert_eq!(Price::ZERO.sub_pct(20), Price::ZERO);
    assert_eq!(Price::ZERO.add_pct(10), Price::ZERO);
}

#[test]
fn repeated_boosts_compound_exactly() {
    let mut price = Price::new(100);
    price = price.add_pct(10);
    assert_eq!(price, Price::new(110));
    price = price.add_pct(10);
    assert_eq!(price, Price::new(121));
}

#[test]
fn arithmetic_saturates_instead_of_wrapping() {
    // Additions near the top of u128 clamp at MAX rather than overflow.
    assert_eq!(Price::new(u128::MAX).add_pct(10), Price::new(u128::MAX));
    // Cuts larger than 100% clamp at zero rather than underflow.
    assert_eq!(Price::new(5).sub_pct(200), Price::ZERO);
}

#[test]
fn serializes_as_decimal_string() {
    let json = serde_json::to_string(&Price::new(ONE_UNIT)).expect("serialize");
    assert_eq!(json, "\"1000000000000000000\"");
}

#[test]
fn deserializes_from_string_or_integer() {
    let from_string: Price = serde_json::from_str("\"1000000000000000000\"").expect("string");
    assert_eq!(from_string, Price::new(ONE_UNIT));

    let from_integer: Price = serde_json::from_str("5").expect("integer");
    assert_eq!(from_integer, Price::new(5));
}

#[test]
fn rejects_garbage_and_negatives() {
    assert!(serde_json::from_str::<Price>("\"abc\"").is_err());
    assert!(serde_json::from_str::<Price>("\"-3\"").is_err());
    assert!(serde_json::from_str::<Price>("-3").is_err());
}

#[test]
fn parses_and_displays_round_trip() {
    let price: Price = "1000000000000000000".parse().expect("parse");
    assert_eq!(price.to_string(), "1000000000000000000");
    assert_eq!(price.raw(), ONE_UNIT);
}
