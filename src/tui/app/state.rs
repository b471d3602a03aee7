use crate::evaluator::{evaluate, Category};
use crate::hand::Hand;
use crate::showdown::{best_hand, Showdown};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Char(char),
    Backspace,
    Submit,
    ClearInput,
    FocusNext,
    FocusPrev,
    RemoveFocused,
    ClearHands,
    ToggleHelp,
}

/// One row of the hands table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandRow {
    pub hand: Hand,
    pub category: Category,
    pub best: bool,
}

#[derive(Debug, Default)]
#[non_exhaustive]
pub struct AppState {
    hands: Vec<Hand>,
    pub focus: usize,
    input: String,
    input_error: Option<String>,
    result: Option<Showdown>,
    help_open: bool,
}

impl AppState {
    /// Longest line the input box accepts; five "10X" tokens plus separators fit easily.
    pub const MAX_INPUT: usize = 32;

    pub fn with_hands(hands: Vec<Hand>) -> Self {
        let mut app = Self { hands, ..Self::default() };
        app.refresh();
        app
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    pub fn result(&self) -> Option<&Showdown> {
        self.result.as_ref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn rows(&self) -> Vec<HandRow> {
        let best = self.result.as_ref().map(|r| r.hands()).unwrap_or_default();
        self.hands
            .iter()
            .map(|&hand| HandRow {
                hand,
                category: evaluate(&hand).category,
                best: best.contains(&hand),
            })
            .collect()
    }

    fn refresh(&mut self) {
        // Only the empty list can fail, and then there is simply no result to show.
        self.result = best_hand(&self.hands).ok();
        if self.focus >= self.hands.len() {
            self.focus = self.hands.len().saturating_sub(1);
        }
    }

    fn push_char(&mut self, c: char) -> bool {
        let c = c.to_ascii_uppercase();
        if !(c.is_ascii_alphanumeric() || c == ' ' || c == ',') || self.input.len() >= Self::MAX_INPUT
        {
            return false;
        }
        self.input.push(c);
        self.input_error = None;
        true
    }

    fn submit(&mut self) -> bool {
        match self.input.parse::<Hand>() {
            Ok(hand) => {
                self.hands.push(hand);
                self.input.clear();
                self.input_error = None;
                self.focus = self.hands.len() - 1;
                self.refresh();
                true
            }
            Err(e) => {
                self.input_error = Some(e.to_string());
                false
            }
        }
    }

    fn remove_focused(&mut self) -> bool {
        if self.focus >= self.hands.len() {
            return false;
        }
        self.hands.remove(self.focus);
        self.refresh();
        true
    }

    /// Apply an action. Returns true if the state changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                true
            }
            _ if self.help_open => false,
            InputAction::Char(c) => self.push_char(c),
            InputAction::Backspace => {
                self.input_error = None;
                self.input.pop().is_some()
            }
            InputAction::Submit => self.submit(),
            InputAction::ClearInput => {
                self.input_error = None;
                let had_input = !self.input.is_empty();
                self.input.clear();
                had_input
            }
            InputAction::FocusNext => {
                if self.hands.is_empty() {
                    return false;
                }
                self.focus = (self.focus + 1) % self.hands.len();
                true
            }
            InputAction::FocusPrev => {
                if self.hands.is_empty() {
                    return false;
                }
                self.focus = (self.focus + self.hands.len() - 1) % self.hands.len();
                true
            }
            InputAction::RemoveFocused => self.remove_focused(),
            InputAction::ClearHands => {
                let had_hands = !self.hands.is_empty();
                self.hands.clear();
                self.refresh();
                had_hands
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(app: &mut AppState, line: &str) {
        for c in line.chars() {
            let _ = app.handle_input(InputAction::Char(c));
        }
    }

    #[test]
    fn lowercase_input_is_uppercased() {
        let mut app = AppState::default();
        type_line(&mut app, "2s 4c");
        assert_eq!(app.input(), "2S 4C");
    }

    #[test]
    fn rejects_symbols_and_overlong_input() {
        let mut app = AppState::default();
        assert!(!app.handle_input(InputAction::Char('!')));
        type_line(&mut app, &"A".repeat(AppState::MAX_INPUT + 5));
        assert_eq!(app.input().len(), AppState::MAX_INPUT);
    }

    #[test]
    fn submit_error_is_kept_until_next_edit() {
        let mut app = AppState::default();
        type_line(&mut app, "2S 3S");
        assert!(!app.handle_input(InputAction::Submit));
        assert!(app.input_error().is_some());
        let _ = app.handle_input(InputAction::Backspace);
        assert!(app.input_error().is_none());
    }

    #[test]
    fn help_swallows_editing() {
        let mut app = AppState::default();
        let _ = app.handle_input(InputAction::ToggleHelp);
        assert!(!app.handle_input(InputAction::Char('A')));
        assert_eq!(app.input(), "");
        let _ = app.handle_input(InputAction::ToggleHelp);
        assert!(app.handle_input(InputAction::Char('A')));
    }
}
