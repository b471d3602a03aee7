mod help;
mod layout;
mod showdown;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    showdown::draw_showdown(f, app);
    if app.help_open() {
        help::draw_help(f);
    }
}
