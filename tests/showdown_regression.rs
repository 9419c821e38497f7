use heads_up_holdem::evaluator::{compare_holdem, evaluate_holdem, Category};
use heads_up_holdem::hand::{Board, HoleCards};
use std::cmp::Ordering;

fn hole(s: &str) -> HoleCards {
    s.parse().expect("valid hole cards")
}

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn pair_beats_lower_pair() {
    let board = board("Ac 9d 4s 2h 6c");
    let ord = compare_holdem(&hole("Ks Kh"), &hole("Qc Qh"), &board).unwrap();
    assert!(ord.is_gt(), "Higher pair should beat lower pair");
}

#[test]
fn pair_kicker_breaks_ties() {
    let board = board("Kc 9d 4s 2h 6c");
    // both pairs of Kings; A kicker beats Q kicker
    let ord = compare_holdem(&hole("Ks Ad"), &hole("Kh Qd"), &board).unwrap();
    assert!(ord.is_gt(), "Pair with higher kicker should win");
}

#[test]
fn two_pair_ordering_high_then_low_then_kicker() {
    let board = board("Kc 9d 4s 2h Ac");
    let ord = compare_holdem(&hole("Ks 9c"), &hole("Kh 2d"), &board).unwrap();
    assert!(ord.is_gt(), "K9 two pair should beat K2 two pair");
}

#[test]
fn straight_top_card_and_wheel() {
    let board = board("5c 4d 3s 2h Kc");
    let ord = compare_holdem(&hole("Ad 9c"), &hole("6d 9h"), &board).unwrap();
    assert!(ord.is_lt(), "6-high straight should beat wheel A-5");
}

#[test]
fn flush_order_by_kickers() {
    let board = board("Ac 9c 4c 2c 6d");
    let ord = compare_holdem(&hole("Kc Qd"), &hole("Qc Jd"), &board).unwrap();
    assert!(ord.is_gt(), "Flush with higher second card should win");
}

#[test]
fn full_house_ordering_trips_then_pair() {
    let board = board("Kc Kd 4s 4h 2c");
    let a = hole("Ks Ad"); // KKK44
    let b = hole("4d Ah"); // 444KK
    assert_eq!(evaluate_holdem(&a, &board).unwrap().category, Category::FullHouse);
    assert_eq!(evaluate_holdem(&b, &board).unwrap().category, Category::FullHouse);
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_gt(), "Full House with higher trips should win");
}

#[test]
fn quads_on_board_kicker_decides() {
    let board = board("9c 9d 9h 9s Kc");
    let ord = compare_holdem(&hole("Ad 2d"), &hole("Qd 3d"), &board).unwrap();
    assert!(ord.is_gt(), "With quads on board, higher kicker in hand should win");
}

#[test]
fn quads_on_board_with_low_hands_tie() {
    let board = board("9c 9d 9h 9s Kc");
    let ord = compare_holdem(&hole("2d 3d"), &hole("4h 5h"), &board).unwrap();
    assert_eq!(ord, Ordering::Equal, "the board king plays for both");
}

#[test]
fn straight_flush_ordering() {
    let board = board("9c 8c 7c 6c 2d");
    let ord = compare_holdem(&hole("5c Ad"), &hole("Tc Ah"), &board).unwrap();
    assert!(ord.is_lt(), "Higher straight flush should win");
}

#[test]
fn royal_flush_beats_pair_of_deuces() {
    let board = board("Qh Jh Th 9h 3c");
    let royal = evaluate_holdem(&hole("Ah Kh"), &board).unwrap();
    let deuces = evaluate_holdem(&hole("2s 2d"), &board).unwrap();
    assert_eq!((royal.category.value(), deuces.category.value()), (10, 2));
    assert!(royal > deuces);
}

#[test]
fn board_that_plays_is_a_tie() {
    let board = board("Ks Kd 7h 7c Ac");
    let ord = compare_holdem(&hole("2c 3d"), &hole("2h 3s"), &board).unwrap();
    assert_eq!(ord, Ordering::Equal);
}

#[test]
fn overlapping_cards_are_rejected() {
    let board = board("Ks Kd 7h 7c Ac");
    assert!(compare_holdem(&hole("Ks 3d"), &hole("2h 3s"), &board).is_err());
}
