use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const KEYS: [(&str, &str); 8] = [
    ("type", "enter cards, e.g. 2S 4C 7S 9H 10H"),
    ("Enter", "add the hand"),
    ("Backspace", "delete a character"),
    ("Up/Down", "move focus"),
    ("Delete", "remove the focused hand"),
    ("F5", "remove all hands"),
    ("Esc", "clear input, or quit when empty"),
    ("?", "toggle this help"),
];

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("Help").borders(Borders::ALL), area);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:>10}  "), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(*what),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}
