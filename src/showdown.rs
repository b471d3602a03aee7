use crate::evaluator::{evaluate, Category};
use crate::hand::{Hand, HandError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("no hands to compare")]
    Empty,
    #[error("hand {index}: {source}")]
    InvalidHand { index: usize, source: HandError },
}

impl ShowdownError {
    /// True when the failure came from a malformed card token rather than a bad hand.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ShowdownError::InvalidHand { source: HandError::CardParse(_), .. })
    }
}

/// Outcome of a showdown.
///
/// A tie is reported as soon as two or more hands share the best score, even
/// when their cards differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Showdown {
    Winner { category: Category, hand: Hand },
    Tie { category: Category, hands: Vec<Hand> },
}

impl Showdown {
    /// The category every best hand shares.
    pub fn category(&self) -> Category {
        match self {
            Showdown::Winner { category, .. } | Showdown::Tie { category, .. } => *category,
        }
    }

    /// The best hands, in input order.
    pub fn hands(&self) -> &[Hand] {
        match self {
            Showdown::Winner { hand, .. } => std::slice::from_ref(hand),
            Showdown::Tie { hands, .. } => hands,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Showdown::Tie { .. })
    }

    /// `"Tie"` for a tie, otherwise the winning category's display name.
    pub fn tag(&self) -> &'static str {
        crate::format::tag(self)
    }
}

/// Pick the best hand(s).
///
/// ```
/// use poker_showdown::hand::Hand;
/// use poker_showdown::showdown::{best_hand, Showdown};
///
/// let ten_high: Hand = "2S 4C 7S 9H 10H".parse().unwrap();
/// let jack_high: Hand = "3S 4S 5D 6H JH".parse().unwrap();
/// let result = best_hand(&[ten_high, jack_high]).unwrap();
/// assert_eq!(result.tag(), "high card");
/// assert_eq!(result.hands(), &[jack_high]);
/// ```
pub fn best_hand(hands: &[Hand]) -> Result<Showdown, ShowdownError> {
    let scored: Vec<_> = hands.iter().map(|h| (evaluate(h).key(), *h)).collect();
    let best = scored.iter().map(|(key, _)| *key).max().ok_or(ShowdownError::Empty)?;

    let mut winners: Vec<Hand> =
        scored.into_iter().filter(|(key, _)| *key == best).map(|(_, h)| h).collect();

    let category = best.category();
    if winners.len() == 1 {
        if let Some(hand) = winners.pop() {
            return Ok(Showdown::Winner { category, hand });
        }
    }
    Ok(Showdown::Tie { category, hands: winners })
}

/// Parse one hand per line and pick the best.
///
/// ```
/// use poker_showdown::showdown::best_hand_str;
///
/// let result = best_hand_str(&["3S 4S 5D 6H JH", "3H 4H 5C 6C JD"]).unwrap();
/// assert_eq!(result.tag(), "Tie");
/// assert_eq!(result.hands().len(), 2);
/// ```
pub fn best_hand_str<S: AsRef<str>>(lines: &[S]) -> Result<Showdown, ShowdownError> {
    let hands = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            line.as_ref().parse::<Hand>().map_err(|source| ShowdownError::InvalidHand { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    best_hand(&hands)
}
