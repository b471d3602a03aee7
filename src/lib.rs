//! poker-showdown: five-card poker hand classification and winner selection
//!
//! Goals:
//! - Deterministic, exact ranking: nine categories, kickers, ace-low straights
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: pick the best hand
//! ```
//! use poker_showdown::evaluator::Category;
//! use poker_showdown::hand::Hand;
//! use poker_showdown::showdown::{best_hand, Showdown};
//!
//! let high: Hand = "4S 5H 6C 8D KH".parse().unwrap();
//! let pair: Hand = "2S 4H 6S 4D JH".parse().unwrap();
//!
//! let result = best_hand(&[high, pair]).unwrap();
//! assert_eq!(result, Showdown::Winner { category: Category::OnePair, hand: pair });
//! assert_eq!(result.to_string(), "one pair: 2S 4H 6S 4D JH");
//! ```
//!
//! ## TUI
//! Run the interactive showdown viewer with:
//! ```sh
//! cargo run --bin poker-showdown -- --tui
//! ```

pub mod cards;
pub mod evaluator;
pub mod format;
pub mod hand;
pub mod showdown;
pub mod tui;

pub use cards::parse_card;
pub use showdown::{best_hand, Showdown, ShowdownError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
