mod common;

use common::{engine_with_roll, request};
use rust_decimal_macros::dec;

#[test]
fn test_reference_payouts() {
    let engine = engine_with_roll(1);

    // multiplier 99 / (100 - number), rounded half-up, then applied to the bet
    let cases = [
        (dec!(40.50), 50, dec!(80.19)),
        (dec!(40.50), 25, dec!(53.46)),
        (dec!(40.50), 100, dec!(4009.50)),
        (dec!(0.01), 99, dec!(0.99)),
        (dec!(0.01), 50, dec!(0.02)),
    ];

    for (bet, number, expected) in cases {
        let response = engine.handle(&request(bet, number)).unwrap();
        assert_eq!(
            response.winning_amount, expected,
            "bet {bet} on number {number}"
        );
    }
}

#[test]
fn test_multiplier_is_rounded_before_the_bet_is_applied() {
    let engine = engine_with_roll(1);

    // 99 / 97 rounds to 1.02 first; a single rounding step at the end would
    // produce 10.21 instead.
    let response = engine.handle(&request(dec!(10.00), 3)).unwrap();

    assert_eq!(response.winning_amount, dec!(10.20));
}

#[test]
fn test_multiplier_midpoint_rounds_up() {
    let engine = engine_with_roll(1);

    // 99 / 8 = 12.375, a midpoint at the second decimal
    let response = engine.handle(&request(dec!(1.00), 92)).unwrap();

    assert_eq!(response.winning_amount, dec!(12.38));
}

#[test]
fn test_payout_midpoint_rounds_up() {
    let engine = engine_with_roll(1);

    // 99 / 60 = 1.65 exactly; 2.50 x 1.65 = 4.125, a midpoint at the payout
    let response = engine.handle(&request(dec!(2.50), 40)).unwrap();

    assert_eq!(response.winning_amount, dec!(4.13));
}

#[test]
fn test_payout_midpoint_after_rounded_multiplier() {
    let engine = engine_with_roll(1);

    // 99 / 98 rounds to 1.01; 40.50 x 1.01 = 40.905
    let response = engine.handle(&request(dec!(40.50), 2)).unwrap();

    assert_eq!(response.winning_amount, dec!(40.91));
}

#[test]
fn test_number_99_matches_flat_multiplier() {
    let engine = engine_with_roll(1);

    // 99 / (100 - 99) leaves the bare numerator, same multiplier as the
    // number-100 ceiling
    let at_99 = engine.handle(&request(dec!(7.00), 99)).unwrap();
    let at_100 = engine.handle(&request(dec!(7.00), 100)).unwrap();

    assert_eq!(at_99.winning_amount, dec!(693.00));
    assert_eq!(at_99, at_100);
}

#[test]
fn test_number_1_never_wins() {
    for roll in 1..=100 {
        let engine = engine_with_roll(roll);
        let response = engine.handle(&request(dec!(100.00), 1)).unwrap();
        assert_eq!(response.winning_amount, dec!(0));
    }
}

#[test]
fn test_win_requires_number_strictly_above_roll() {
    let engine = engine_with_roll(49);

    let win = engine.handle(&request(dec!(40.50), 50)).unwrap();
    assert_eq!(win.winning_amount, dec!(80.19));

    let engine = engine_with_roll(50);
    let lose = engine.handle(&request(dec!(40.50), 50)).unwrap();
    assert_eq!(lose.winning_amount, dec!(0));
}
