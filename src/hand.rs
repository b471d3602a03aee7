use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Five distinct cards, kept in the order they were given.
///
/// ```
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "2S 4C 7S 9H 10H".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert!("2S 4C 7S 9H".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let five: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::CardCount(cards.len()))?;
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in five {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self(five))
    }

    /// Cards in input order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_new(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Hand::try_new(&cards)
    }
}
