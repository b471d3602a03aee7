//! Text rendering of hands and showdown results.
//!
//! A winner renders as `"<category>: <cards>"`, a tie as `"Tie: <cards> | <cards>"`.

use crate::evaluator::Category;
use crate::hand::Hand;
use crate::showdown::Showdown;
use std::fmt;

/// Result tag used in place of a category name when hands tie.
pub const TIE_TAG: &str = "Tie";

pub fn category_name(category: Category) -> &'static str {
    category.name()
}

/// `"Tie"` for a tie, otherwise the winning category's display name.
pub fn tag(result: &Showdown) -> &'static str {
    match result {
        Showdown::Winner { category, .. } => category_name(*category),
        Showdown::Tie { .. } => TIE_TAG,
    }
}

/// Render a result on one line.
///
/// ```
/// use poker_showdown::format::render;
/// use poker_showdown::showdown::best_hand_str;
///
/// let result = best_hand_str(&["2H 3C 4D 5D 6H", "4S AH 3S 2D 5H"]).unwrap();
/// assert_eq!(render(&result), "straight: 2H 3C 4D 5D 6H");
/// ```
pub fn render(result: &Showdown) -> String {
    result.to_string()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", tag(self))?;
        for (i, hand) in self.hands().iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{hand}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showdown::best_hand_str;

    #[test]
    fn hand_renders_canonical_tokens() {
        let hand: Hand = "TS 4C 7S 9H 10H".parse().unwrap();
        assert_eq!(hand.to_string(), "10S 4C 7S 9H 10H");
    }

    #[test]
    fn tag_uses_category_name_for_winner() {
        let result = best_hand_str(&["2S 4C 7S 9H 10H", "3S 4S 5D 6H JH"]).unwrap();
        assert_eq!(tag(&result), "high card");
        assert_eq!(render(&result), "high card: 3S 4S 5D 6H JH");
    }

    #[test]
    fn tie_renders_all_members() {
        let result = best_hand_str(&["3S 4S 5D 6H JH", "3H 4H 5C 6C JD"]).unwrap();
        assert_eq!(tag(&result), TIE_TAG);
        assert_eq!(render(&result), "Tie: 3S 4S 5D 6H JH | 3H 4H 5C 6C JD");
    }

    #[test]
    fn category_display_matches_name() {
        for c in Category::ALL {
            assert_eq!(c.to_string(), category_name(c));
        }
        assert_eq!(Category::FullHouse.to_string(), "full house");
    }
}
