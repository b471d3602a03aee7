use crate::cards::{Card, Suit};

/// Partition of a hand by suit. A flush is a single group holding every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitGroups {
    counts: [u8; 4],
    pub flush_suit: Option<Suit>,
}

impl SuitGroups {
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards {
            counts[card.suit() as usize] += 1;
        }
        let flush_suit = Suit::ALL
            .into_iter()
            .find(|&s| !cards.is_empty() && usize::from(counts[s as usize]) == cards.len());
        Self { counts, flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    /// Number of non-empty suit groups.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, suit: Suit) -> u8 {
        self.counts[suit as usize]
    }
}
