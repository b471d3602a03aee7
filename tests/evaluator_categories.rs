use poker_showdown::cards::{Card, Rank, Suit};
use poker_showdown::evaluator::{classify, evaluate, evaluate_five, Category};
use poker_showdown::hand::Hand;

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

#[test]
fn category_straight_flush() {
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = evaluate_five(&sf);
    assert_eq!(e.category, Category::StraightFlush);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category, Category::FourOfAKind);
}

#[test]
fn category_full_house() {
    assert_eq!(classify(&hand("3C 3D 3H JS JC")), Category::FullHouse);
}

#[test]
fn category_flush() {
    assert_eq!(classify(&hand("KH 10H 8H 6H 3H")), Category::Flush);
}

#[test]
fn category_straight() {
    assert_eq!(classify(&hand("AC 5C 4D 3H 2S")), Category::Straight);
    assert_eq!(classify(&hand("10C JD QH KS AS")), Category::Straight);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(classify(&hand("QC QD QH 10S 2C")), Category::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    assert_eq!(classify(&hand("JC JD 9C 9H 2S")), Category::TwoPair);
}

#[test]
fn category_one_pair() {
    assert_eq!(classify(&hand("AH AD 10S 9C 2D")), Category::OnePair);
}

#[test]
fn category_high_card() {
    assert_eq!(classify(&hand("AH KD 7S 5C 2D")), Category::HighCard);
}

#[test]
fn near_straights_are_not_straights() {
    // wraparound and one gap
    assert_eq!(classify(&hand("QC KD AH 2S 3C")), Category::HighCard);
    assert_eq!(classify(&hand("2C 3D 4H 5S 7C")), Category::HighCard);
    assert_eq!(classify(&hand("2C 3C 4C 5C 7C")), Category::Flush);
}

#[test]
fn ten_spellings_classify_the_same() {
    let a = evaluate(&hand("10S JS QS KS AS"));
    let b = evaluate(&hand("TS JS QS KS AS"));
    assert_eq!(a.category, Category::StraightFlush);
    assert_eq!(a, b);
}

#[test]
fn categories_strictly_ordered() {
    // One example per category, weakest first
    let ladder = [
        "AH KD 7S 5C 2D",
        "2H 2D 3S 4C 5D",
        "2H 2D 3S 3C 4D",
        "2H 2D 2S 3C 4D",
        "AH 2D 3S 4C 5D",
        "2H 3H 4H 5H 7H",
        "2H 2D 2S 3C 3D",
        "2H 2D 2S 2C 3D",
        "AH 2H 3H 4H 5H",
    ];
    let evals: Vec<_> = ladder.iter().map(|s| evaluate(&hand(s))).collect();
    for (e, cat) in evals.iter().zip(Category::ALL) {
        assert_eq!(e.category, cat);
    }
    for w in evals.windows(2) {
        assert!(w[0] < w[1], "{:?} should lose to {:?}", w[0].category, w[1].category);
    }
}
