//! People list with the station position as header.

use crossterm::event::{KeyCode, KeyEvent};
use peopleinspace_models::{PersonRecord, PositionRecord};
use peopleinspace_sdk::ViewModelFacade;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{draw_title_bar, IMAGE_MARK, IMAGE_SPACER};

pub const TITLE: &str = "People In Space";
const HINT: &str = " ↑/↓ move · Enter open · q quit ";

/// What sits left of a row's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Image(String),
    Spacer,
}

impl ImageSlot {
    /// An empty URL yields a spacer.
    pub fn from_url(url: String) -> Self {
        if url.is_empty() {
            ImageSlot::Spacer
        } else {
            ImageSlot::Image(url)
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ImageSlot::Image(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub person: PersonRecord,
    pub image: ImageSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: &'static str,
    pub header: String,
    pub rows: Vec<PersonRow>,
}

pub fn header_text(position: PositionRecord) -> String {
    format!("ISS Position = {position}")
}

/// Build the list screen from one snapshot. Rows keep feed order.
pub fn view(
    people: &[PersonRecord],
    position: PositionRecord,
    facade: &dyn ViewModelFacade,
) -> ListView {
    let rows = people
        .iter()
        .map(|person| PersonRow {
            image: ImageSlot::from_url(facade.person_image_url(person.name().as_str())),
            person: person.clone(),
        })
        .collect();
    ListView {
        title: TITLE,
        header: header_text(position),
        rows,
    }
}

/// Cursor over the rows. The only state kept between renders.
#[derive(Debug, Default)]
pub struct ListScreen {
    state: ListState,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Keep the cursor on a row that exists.
    fn clamp(&mut self, len: usize) {
        let clamped = match (self.state.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) => Some(i.min(n - 1)),
        };
        self.state.select(clamped);
    }

    /// Move the cursor or activate the selected row.
    ///
    /// `on_select` runs once per activation, with no debounce.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        view: &ListView,
        on_select: &mut dyn FnMut(&PersonRecord),
    ) {
        let len = view.rows.len();
        self.clamp(len);
        let Some(i) = self.state.selected() else {
            return;
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select(Some(if i + 1 >= len { 0 } else { i + 1 }));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select(Some(if i == 0 { len - 1 } else { i - 1 }));
            }
            KeyCode::Enter | KeyCode::Right => on_select(&view.rows[i].person),
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, view: &ListView) {
        self.clamp(view.rows.len());

        let [title_area, header_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        draw_title_bar(f, title_area, view.title, HINT);

        let header = Paragraph::new(view.header.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, header_area);

        let items: Vec<ListItem> = view.rows.iter().map(row_item).collect();
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, list_area, &mut self.state);
    }
}

fn row_item(row: &PersonRow) -> ListItem<'static> {
    let slot = match &row.image {
        ImageSlot::Image(_) => Span::styled(IMAGE_MARK, Style::default().fg(Color::Magenta)),
        ImageSlot::Spacer => Span::raw(IMAGE_SPACER),
    };
    ListItem::new(vec![
        Line::from(vec![
            slot,
            Span::raw(" "),
            Span::raw(row.person.name().to_string()),
        ]),
        Line::from(vec![
            Span::raw(IMAGE_SPACER),
            Span::raw(" "),
            Span::styled(row.person.craft().to_string(), Style::default().fg(Color::DarkGray)),
        ]),
    ])
}
