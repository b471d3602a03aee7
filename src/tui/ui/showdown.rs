use crate::cards::{Card, Suit};
use crate::tui::app::{AppState, HandRow};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;

pub(super) fn draw_showdown(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // result
            Constraint::Min(3),    // hands
            Constraint::Length(4), // input
        ])
        .split(f.area());

    draw_result(f, chunks[0], app);
    draw_hands(f, chunks[1], app);
    draw_input(f, chunks[2], app);
}

fn draw_result(f: &mut Frame, area: Rect, app: &AppState) {
    let line = match app.result() {
        Some(result) => {
            let style = if result.is_tie() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            };
            let mut spans = vec![Span::styled(result.tag().to_string(), style)];
            if result.is_tie() {
                spans.push(Span::raw(format!(
                    "  {} hands share {}",
                    result.hands().len(),
                    result.category()
                )));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "Add two or more hands to start a showdown",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    let title = format!("poker-showdown v{}", crate::VERSION);
    let para = Paragraph::new(line).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_hands(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().title("Hands").borders(Borders::ALL), area);
    let lines: Vec<Line> =
        app.rows().iter().enumerate().map(|(i, row)| hand_line(i, row, i == app.focus)).collect();
    f.render_widget(Paragraph::new(lines), inner(area));
}

fn hand_line(index: usize, row: &HandRow, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![Span::raw(format!("{marker}{:>2}. ", index + 1))];
    for card in row.hand.cards() {
        let (text, style) = card_span(*card);
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    let cat_style = if row.best {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    spans.push(Span::styled(format!(" {}", row.category), cat_style));
    if row.best {
        spans.push(Span::styled(" *", cat_style));
    }
    Line::from(spans)
}

fn draw_input(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![Line::from(format!("{}_", app.input()))];
    let hint = match app.input_error() {
        Some(err) => Span::styled(err.to_string(), Style::default().fg(Color::Red)),
        None => Span::styled(
            "[Enter] Add  [Del] Remove  [?] Help  [Esc] Quit",
            Style::default().add_modifier(Modifier::DIM),
        ),
    };
    lines.push(Line::from(hint));
    let para = Paragraph::new(lines).block(Block::default().title("New hand").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn card_span(card: Card) -> (String, Style) {
    let (glyph, style) = suit_glyph_and_style(card.suit());
    (format!("{:>2}{glyph}", card.rank().symbol()), style)
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}
