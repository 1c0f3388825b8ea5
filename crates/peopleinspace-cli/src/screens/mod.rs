//! The two screens.
//!
//! Each screen is split in two halves: a pure `view` function turning the
//! latest snapshot into a plain view tree, and a stateful screen struct
//! that draws that tree and turns key presses into callbacks. Nothing in
//! a view tree survives the next emission.

pub mod detail;
pub mod list;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder drawn where a photo would go. Terminals cannot show the
/// photo itself.
pub const IMAGE_MARK: &str = "[photo]";

/// Blank of the same width as [`IMAGE_MARK`].
pub const IMAGE_SPACER: &str = "       ";

/// Top bar shared by both screens.
pub(crate) fn draw_title_bar(f: &mut Frame, area: Rect, title: &str, hint: &str) {
    let bar = Paragraph::new(Line::from(title.to_string()))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_bottom(Line::from(hint.to_string()).alignment(Alignment::Right))
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(bar, area);
}
