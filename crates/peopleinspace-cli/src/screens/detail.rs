//! One person's details.

use crossterm::event::{KeyCode, KeyEvent};
use peopleinspace_models::PersonName;
use peopleinspace_sdk::ViewModelFacade;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{draw_title_bar, IMAGE_MARK};

const HINT: &str = " Esc back · ↑/↓ scroll ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailBody {
    pub name: PersonName,
    pub craft: String,
    /// `None` when the person has no photo.
    pub image: Option<String>,
    pub bio: String,
}

/// Title bar plus an optional body. An unknown person gets no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub body: Option<DetailBody>,
}

pub fn view(name: &str, facade: &dyn ViewModelFacade) -> DetailView {
    let body = facade.person(name).map(|person| {
        let image = Some(facade.person_image_url(name)).filter(|url| !url.is_empty());
        DetailBody {
            bio: facade.person_bio(name),
            craft: person.craft().to_string(),
            name: person.name().clone(),
            image,
        }
    });
    DetailView {
        title: format!("← {name}"),
        body,
    }
}

#[derive(Debug, Default)]
pub struct DetailScreen {
    scroll: u16,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a different person comes on screen.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// `on_back` runs exactly once per back key press.
    pub fn handle_key(&mut self, key: KeyEvent, on_back: &mut dyn FnMut()) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => on_back(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, view: &DetailView) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        draw_title_bar(f, title_area, &view.title, HINT);

        let Some(body) = &view.body else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                body.name.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                body.craft.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];
        if let Some(url) = &body.image {
            lines.push(Line::from(vec![
                Span::styled(IMAGE_MARK, Style::default().fg(Color::Magenta)),
                Span::raw(" "),
                Span::raw(url.clone()),
            ]));
            lines.push(Line::default());
        }
        lines.push(Line::from(body.bio.clone()));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        f.render_widget(paragraph, body_area.inner(Margin::new(2, 1)));
    }
}
