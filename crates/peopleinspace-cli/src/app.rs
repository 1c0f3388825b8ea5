use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use peopleinspace_models::{PersonRecord, PositionRecord, Route, Screen};
use peopleinspace_sdk::ViewModelFacade;
use ratatui::Frame;
use tokio::sync::watch;
use tracing::debug;

use crate::app_state::AppController;
use crate::navigation::NavigationController;
use crate::screens::{detail, list};
use crate::tui::Action;

pub struct PeopleInSpaceApp {
    facade: Arc<dyn ViewModelFacade>,
    people: watch::Receiver<Vec<PersonRecord>>,
    position: watch::Receiver<PositionRecord>,
    nav: NavigationController,
    list_screen: list::ListScreen,
    detail_screen: detail::DetailScreen,
    should_quit: bool,
}

impl PeopleInSpaceApp {
    pub fn new(facade: Arc<dyn ViewModelFacade>) -> Self {
        Self {
            people: facade.observe_people_in_space(),
            position: facade.observe_position(),
            facade,
            nav: NavigationController::new(),
            list_screen: list::ListScreen::new(),
            detail_screen: detail::DetailScreen::new(),
            should_quit: false,
        }
    }

    /// Start somewhere other than the list. A detail route is stacked on
    /// top of the list.
    pub fn with_route(mut self, route: Route) -> Self {
        self.nav.navigate(route);
        self
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    fn list_view(&self) -> list::ListView {
        let people = self.people.borrow().clone();
        let position = *self.position.borrow();
        list::view(&people, position, self.facade.as_ref())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.nav.state().current_screen {
            Screen::List => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                    return;
                }
                let view = self.list_view();
                let nav = &mut self.nav;
                let detail_screen = &mut self.detail_screen;
                self.list_screen.handle_key(key, &view, &mut |person| {
                    if nav.navigate_to_detail(person.name().clone()) {
                        detail_screen.reset();
                    }
                });
            }
            Screen::Detail => {
                let nav = &mut self.nav;
                self.detail_screen.handle_key(key, &mut || {
                    nav.pop_back();
                });
            }
        }

        let state = self.nav.state();
        debug!(
            screen = %state.current_screen,
            person = ?state.selected_person_name,
            depth = self.nav.depth(),
            "navigation state"
        );
    }
}

impl AppController for PeopleInSpaceApp {
    fn update(&mut self, action: Action) {
        match action {
            Action::Key(key) => self.handle_key(key),
            Action::FeedUpdated => debug!("feed updated, re-rendering"),
            Action::Resize(width, height) => debug!(width, height, "terminal resized"),
            Action::Tick => {}
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let state = self.nav.state();
        match (state.current_screen, state.selected_person_name) {
            (Screen::Detail, Some(name)) => {
                let view = detail::view(name.as_str(), self.facade.as_ref());
                self.detail_screen.render(f, area, &view);
            }
            _ => {
                let view = self.list_view();
                self.list_screen.render(f, area, &view);
            }
        }
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationState;
    use crate::screens::testing::{draw, facade};
    use peopleinspace_models::PersonName;
    use peopleinspace_sdk::PeopleInSpaceRepository;

    fn press(app: &mut PeopleInSpaceApp, code: KeyCode) {
        app.update(Action::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn screen_text(app: &mut PeopleInSpaceApp) -> Vec<String> {
        draw(60, 16, |f| app.render(f))
    }

    fn app() -> (Arc<PeopleInSpaceRepository>, PeopleInSpaceApp) {
        let repo = Arc::new(facade());
        let app = PeopleInSpaceApp::new(repo.clone());
        (repo, app)
    }

    fn list_state() -> NavigationState {
        NavigationState {
            current_screen: Screen::List,
            selected_person_name: None,
        }
    }

    #[test]
    fn select_then_back_survives_rerenders() {
        let (repo, mut app) = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.navigation().state().selected_person_name,
            Some(PersonName::new("Alice"))
        );

        repo.publish_position(PositionRecord::new(3.0, 4.0));
        app.update(Action::FeedUpdated);
        screen_text(&mut app);
        repo.publish_people(vec![PersonRecord::try_new("Bob", "Dragon").unwrap()]);
        app.update(Action::FeedUpdated);
        let lines = screen_text(&mut app);
        // Alice left the feed: title only.
        assert!(lines[1].contains("← Alice"));
        assert!(lines[3..].iter().all(|l| l.trim().is_empty()));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigation().state(), list_state());
        assert_eq!(app.navigation().depth(), 1);
    }

    #[test]
    fn double_enter_navigates_once() {
        let (_repo, mut app) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigation().depth(), 2);
        assert_eq!(
            app.navigation().state(),
            NavigationState {
                current_screen: Screen::Detail,
                selected_person_name: Some(PersonName::new("Alice")),
            }
        );
    }

    #[test]
    fn esc_on_list_is_a_noop() {
        let (_repo, mut app) = app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigation().state(), list_state());
        assert!(!app.should_quit());
    }

    #[test]
    fn list_renders_live_values() {
        let (repo, mut app) = app();
        repo.publish_position(PositionRecord::new(1.0, 2.0));
        let lines = screen_text(&mut app);
        assert!(lines.iter().any(|l| l.contains("ISS Position = (1.0, 2.0)")));
        let alice = lines.iter().position(|l| l.contains("Alice")).unwrap();
        let bob = lines.iter().position(|l| l.contains("Bob")).unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn detail_renders_selected_person() {
        let (_repo, mut app) = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        let lines = screen_text(&mut app);
        assert!(lines[1].contains("← Bob"));
        assert!(lines.iter().any(|l| l.contains("Dragon")));
    }

    #[test]
    fn deep_link_stacks_on_list() {
        let (_repo, app) = app();
        let mut app = app.with_route("PersonDetails/Bob".parse().unwrap());
        assert_eq!(app.navigation().depth(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigation().state(), list_state());
    }

    #[test]
    fn screen_drawn_follows_navigation_state() {
        let (_repo, app) = app();
        let mut app = app.with_route("PersonDetails/Zed".parse().unwrap());
        assert_eq!(app.navigation().state().current_screen, Screen::Detail);
        let lines = screen_text(&mut app);
        assert!(lines[1].contains("← Zed"));
        assert!(lines.iter().all(|l| !l.contains("ISS Position")));

        app.update(Action::Resize(80, 24));
        assert_eq!(app.navigation().state().current_screen, Screen::Detail);

        press(&mut app, KeyCode::Backspace);
        let lines = screen_text(&mut app);
        assert!(lines.iter().any(|l| l.contains("ISS Position = (0.0, 0.0)")));
        assert!(lines.iter().any(|l| l.contains("Alice")));
    }

    #[test]
    fn quit_keys() {
        let (_repo, mut app) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());

        app.update(Action::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_quit());

        let (_repo, mut app) = self::app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
