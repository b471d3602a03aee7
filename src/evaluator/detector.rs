use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, ScoreKey};

/// Each category detector recognises its category and builds the matching key.
pub trait CategoryDetector {
    fn category(&self) -> Category;

    /// The tie-break ranks if the hand falls into this category, `None` otherwise.
    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>>;

    fn score(&self, analysis: &HandAnalysis) -> Option<ScoreKey> {
        self.tiebreak(analysis).map(|ranks| ScoreKey::new(self.category(), &ranks))
    }
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        if !analysis.suit_groups.is_flush() {
            return None;
        }
        analysis.straight_info.top_rank.map(|top| vec![top])
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = *analysis.rank_groups.kickers().first()?;
        Some(vec![quad, kicker])
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let trips = analysis.rank_groups.trips()?;
        let pair = *analysis.rank_groups.pairs().first()?;
        Some(vec![trips, pair])
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        // All 5 cards are kickers in flush ranking
        analysis.suit_groups.is_flush().then(|| analysis.ranks.to_vec())
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        analysis.straight_info.top_rank.map(|top| vec![top])
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        if analysis.rank_groups.has_full_house() {
            return None;
        }
        let trips = analysis.rank_groups.trips()?;
        let mut key = vec![trips];
        key.extend(analysis.rank_groups.kickers());
        Some(key)
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let mut key = analysis.rank_groups.pairs();
        if key.len() != 2 {
            return None;
        }
        key.extend(analysis.rank_groups.kickers());
        Some(key)
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let groups = &analysis.rank_groups;
        let mut key = groups.pairs();
        if key.len() != 1 || groups.trips().is_some() {
            return None;
        }
        key.extend(groups.kickers());
        Some(key)
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        Some(analysis.ranks.to_vec())
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

/// First matching detector wins.
pub fn classify(analysis: &HandAnalysis) -> ScoreKey {
    DETECTORS
        .iter()
        .find_map(|detector| detector.score(analysis))
        .unwrap_or_else(|| ScoreKey::new(Category::HighCard, &analysis.ranks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn analyze(cards: [(Rank, Suit); 5]) -> HandAnalysis {
        HandAnalysis::new(&cards.map(|(r, s)| Card::new(r, s)))
    }

    #[test]
    fn detectors_are_in_strength_order() {
        let cats: Vec<Category> = DETECTORS.iter().map(|d| d.category()).collect();
        let mut expected = Category::ALL.to_vec();
        expected.reverse();
        assert_eq!(cats, expected);
    }

    #[test]
    fn test_straight_flush_detector() {
        let analysis = analyze([
            (Rank::Nine, Suit::Hearts),
            (Rank::Eight, Suit::Hearts),
            (Rank::Seven, Suit::Hearts),
            (Rank::Six, Suit::Hearts),
            (Rank::Five, Suit::Hearts),
        ]);
        assert_eq!(StraightFlushDetector.tiebreak(&analysis), Some(vec![Rank::Nine]));
        assert_eq!(classify(&analysis).category(), Category::StraightFlush);
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        let analysis = analyze([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Ace, Suit::Clubs),
            (Rank::King, Suit::Spades),
        ]);
        assert_eq!(FourOfAKindDetector.tiebreak(&analysis), Some(vec![Rank::Ace, Rank::King]));
        assert!(FullHouseDetector.tiebreak(&analysis).is_none());
    }

    #[test]
    fn test_full_house_detector() {
        let analysis = analyze([
            (Rank::Queen, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::King, Suit::Diamonds),
            (Rank::Queen, Suit::Clubs),
            (Rank::King, Suit::Spades),
        ]);
        assert_eq!(FullHouseDetector.tiebreak(&analysis), Some(vec![Rank::King, Rank::Queen]));
        assert!(ThreeOfAKindDetector.tiebreak(&analysis).is_none());
        assert!(OnePairDetector.tiebreak(&analysis).is_none());
    }

    #[test]
    fn test_flush_detector() {
        let analysis = analyze([
            (Rank::Two, Suit::Diamonds),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Five, Suit::Diamonds),
            (Rank::Ace, Suit::Diamonds),
        ]);
        assert_eq!(
            FlushDetector.tiebreak(&analysis),
            Some(vec![Rank::Ace, Rank::Jack, Rank::Nine, Rank::Five, Rank::Two])
        );
        assert!(StraightFlushDetector.tiebreak(&analysis).is_none());
    }

    #[test]
    fn test_straight_detector_wheel() {
        let analysis = analyze([
            (Rank::Four, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::Three, Suit::Spades),
            (Rank::Two, Suit::Diamonds),
            (Rank::Five, Suit::Hearts),
        ]);
        assert_eq!(StraightDetector.tiebreak(&analysis), Some(vec![Rank::Five]));
        assert_eq!(classify(&analysis).category(), Category::Straight);
    }

    #[test]
    fn test_three_of_a_kind_detector() {
        let analysis = analyze([
            (Rank::Jack, Suit::Spades),
            (Rank::Seven, Suit::Hearts),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Clubs),
            (Rank::Jack, Suit::Hearts),
        ]);
        assert_eq!(
            ThreeOfAKindDetector.tiebreak(&analysis),
            Some(vec![Rank::Jack, Rank::Nine, Rank::Seven])
        );
    }

    #[test]
    fn test_two_pair_detector() {
        let analysis = analyze([
            (Rank::Queen, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::Ace, Suit::Diamonds),
            (Rank::King, Suit::Clubs),
            (Rank::Ace, Suit::Spades),
        ]);
        assert_eq!(
            TwoPairDetector.tiebreak(&analysis),
            Some(vec![Rank::Ace, Rank::King, Rank::Queen])
        );
        assert!(OnePairDetector.tiebreak(&analysis).is_none());
    }

    #[test]
    fn test_one_pair_detector() {
        let analysis = analyze([
            (Rank::Jack, Suit::Spades),
            (Rank::Three, Suit::Hearts),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Seven, Suit::Clubs),
            (Rank::Jack, Suit::Hearts),
        ]);
        assert_eq!(
            OnePairDetector.tiebreak(&analysis),
            Some(vec![Rank::Jack, Rank::Nine, Rank::Seven, Rank::Three])
        );
    }

    #[test]
    fn test_high_card_detector() {
        let analysis = analyze([
            (Rank::Seven, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Clubs),
            (Rank::Ace, Suit::Spades),
        ]);
        assert!(HighCardDetector.tiebreak(&analysis).is_some());
        let key = classify(&analysis);
        assert_eq!(key.category(), Category::HighCard);
        assert_eq!(key.tiebreak(), &[Rank::Ace, Rank::King, Rank::Jack, Rank::Nine, Rank::Seven]);
    }

    #[test]
    fn test_detector_priority_straight_flush_over_flush() {
        let analysis = analyze([
            (Rank::Nine, Suit::Hearts),
            (Rank::Eight, Suit::Hearts),
            (Rank::Seven, Suit::Hearts),
            (Rank::Six, Suit::Hearts),
            (Rank::Five, Suit::Hearts),
        ]);

        // Straight and flush detectors also match; the straight flush comes first
        assert!(FlushDetector.tiebreak(&analysis).is_some());
        assert!(StraightDetector.tiebreak(&analysis).is_some());
        assert_eq!(classify(&analysis).category(), Category::StraightFlush);
    }
}
