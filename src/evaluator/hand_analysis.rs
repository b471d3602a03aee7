use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_groups::SuitGroups;
use crate::cards::{Card, Rank};
use crate::evaluator::{Evaluation, ScoreKey};

/// Pre-computed features of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks in descending order.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_groups: SuitGroups,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Rank descending, then suit descending, for stable output
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.cmp(a));

        let ranks = sorted_cards.map(Card::rank);

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_ranks(&ranks),
            suit_groups: SuitGroups::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    pub fn build_evaluation(&self, key: ScoreKey) -> Evaluation {
        Evaluation { category: key.category(), sorted: self.sorted_cards, key }
    }
}
