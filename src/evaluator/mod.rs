pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub mod rank_groups;
pub mod straight_info;
pub mod suit_groups;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display name, e.g. `"three of a kind"`.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }

    /// Length of the tie-break sequence hands of this category carry.
    pub const fn tiebreak_len(self) -> usize {
        match self {
            Category::StraightFlush | Category::Straight => 1,
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::OnePair => 4,
            Category::Flush | Category::HighCard => 5,
        }
    }
}

/// Comparable hand strength: category first, then tie-break ranks most significant first.
///
/// Two keys of the same category always carry the same number of ranks, so the
/// unused tail slots never decide a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreKey {
    category: Category,
    ranks: [Rank; 5],
    len: u8,
}

impl ScoreKey {
    pub(crate) fn new(category: Category, tiebreak: &[Rank]) -> Self {
        debug_assert_eq!(tiebreak.len(), category.tiebreak_len());
        let mut ranks = [Rank::Two; 5];
        let len = tiebreak.len().min(ranks.len());
        ranks[..len].copy_from_slice(&tiebreak[..len]);
        Self { category, ranks, len: len as u8 }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// The category-specific tie-break ranks, e.g. `[quad, kicker]` for four of a kind.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

/// Detailed evaluation result. `key` drives ordering.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub category: Category,
    /// The five cards sorted by rank descending.
    pub sorted: [Card; 5],
    key: ScoreKey,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub const fn key(&self) -> ScoreKey {
        self.key
    }
}

/// Evaluate a validated hand.
///
/// ```
/// use poker_showdown::evaluator::{evaluate, Category};
/// use poker_showdown::hand::Hand;
/// use poker_showdown::cards::Rank;
///
/// let hand: Hand = "4S AH 3S 2D 5H".parse().unwrap();
/// let eval = evaluate(&hand);
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.key().tiebreak(), &[Rank::Five]);
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    evaluate_five(hand.cards())
}

/// Evaluate exactly five cards; detects category and builds the tie-break key.
///
/// Cards are assumed distinct; use [`Hand`] to enforce that.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let analysis = hand_analysis::HandAnalysis::new(cards);
    let key = detector::classify(&analysis);
    analysis.build_evaluation(key)
}

/// The category a hand falls into.
pub fn classify(hand: &Hand) -> Category {
    evaluate(hand).category
}

/// Compare two hands by strength.
///
/// ```
/// use poker_showdown::evaluator::compare;
/// use poker_showdown::hand::Hand;
/// use std::cmp::Ordering;
///
/// let pair: Hand = "2S 4H 6S 4D JH".parse().unwrap();
/// let high: Hand = "4S 5H 6C 8D KH".parse().unwrap();
/// assert_eq!(compare(&pair, &high), Ordering::Greater);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    evaluate(a).cmp(&evaluate(b))
}
