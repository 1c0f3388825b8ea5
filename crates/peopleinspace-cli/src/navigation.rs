//! Explicit back stack between the list and detail screens.
//!
//! The stack always holds [`Route::PersonList`] at the bottom and at most
//! one detail route on top, so the controller is a two-state machine:
//!
//! ```text
//!   List ──navigate_to_detail(name)──▶ Detail(name)
//!   List ◀────────pop_back()────────── Detail(name)
//! ```
//!
//! Repeating `navigate_to_detail` with the name already shown is a no-op,
//! which makes double activation of a row harmless.

use peopleinspace_models::{PersonName, Route, Screen};
use tracing::debug;

/// Observable navigation state.
///
/// `selected_person_name` is `Some` exactly when `current_screen` is
/// [`Screen::Detail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_screen: Screen,
    pub selected_person_name: Option<PersonName>,
}

static ROOT: Route = Route::START;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    back_stack: Vec<Route>,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            back_stack: vec![Route::START],
        }
    }

    /// Route currently on screen.
    pub fn current(&self) -> &Route {
        self.back_stack.last().unwrap_or(&ROOT)
    }

    pub fn state(&self) -> NavigationState {
        let current = self.current();
        NavigationState {
            current_screen: current.screen(),
            selected_person_name: current.person().cloned(),
        }
    }

    /// Number of entries on the back stack, root included.
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Show the detail screen for `name`. Returns whether anything changed.
    ///
    /// From another person's detail screen the top entry is replaced, so
    /// back always returns to the list.
    pub fn navigate_to_detail(&mut self, name: PersonName) -> bool {
        let target = Route::PersonDetails(name);
        match self.current() {
            current if *current == target => {
                debug!(route = %target, "already showing route");
                false
            }
            Route::PersonList => {
                debug!(route = %target, "push");
                self.back_stack.push(target);
                true
            }
            Route::PersonDetails(_) => {
                debug!(route = %target, "replace top");
                let last = self.back_stack.len() - 1;
                self.back_stack[last] = target;
                true
            }
        }
    }

    /// Return to the previous screen. At the list this does nothing and
    /// returns `false`; the host decides whether that means exit.
    pub fn pop_back(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            debug!("pop at root ignored");
            return false;
        }
        let popped = self.back_stack.pop();
        debug!(route = ?popped, "pop");
        true
    }

    /// Go to an arbitrary route, e.g. a deep link from the command line.
    pub fn navigate(&mut self, route: Route) -> bool {
        match route {
            Route::PersonList => {
                let changed = self.back_stack.len() > 1;
                self.back_stack.truncate(1);
                changed
            }
            Route::PersonDetails(name) => self.navigate_to_detail(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> PersonName {
        PersonName::new("Alice")
    }

    fn list_state() -> NavigationState {
        NavigationState {
            current_screen: Screen::List,
            selected_person_name: None,
        }
    }

    #[test]
    fn starts_at_list() {
        let nav = NavigationController::new();
        assert_eq!(nav.state(), list_state());
        assert_eq!(nav.current(), &Route::PersonList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn select_then_back_returns_to_list() {
        let mut nav = NavigationController::new();
        assert!(nav.navigate_to_detail(alice()));
        assert_eq!(
            nav.state(),
            NavigationState {
                current_screen: Screen::Detail,
                selected_person_name: Some(alice()),
            }
        );
        assert!(nav.pop_back());
        assert_eq!(nav.state(), list_state());
    }

    #[test]
    fn double_selection_is_idempotent() {
        let mut nav = NavigationController::new();
        assert!(nav.navigate_to_detail(alice()));
        assert!(!nav.navigate_to_detail(alice()));
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.state().selected_person_name, Some(alice()));

        assert!(nav.pop_back());
        assert_eq!(nav.state(), list_state());
    }

    #[test]
    fn pop_at_list_is_a_noop() {
        let mut nav = NavigationController::new();
        assert!(!nav.pop_back());
        assert!(!nav.pop_back());
        assert_eq!(nav.state(), list_state());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), &Route::PersonList);
    }

    #[test]
    fn other_detail_replaces_top() {
        let mut nav = NavigationController::new();
        nav.navigate_to_detail(alice());
        assert!(nav.navigate_to_detail(PersonName::new("Bob")));
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current().to_string(), "PersonDetails/Bob");
        nav.pop_back();
        assert_eq!(nav.state(), list_state());
    }

    #[test]
    fn selection_invariant_holds_through_transitions() {
        fn check(nav: &NavigationController) {
            let s = nav.state();
            assert_eq!(
                s.selected_person_name.is_some(),
                s.current_screen == Screen::Detail
            );
        }

        let mut nav = NavigationController::new();
        check(&nav);
        nav.navigate_to_detail(alice());
        check(&nav);
        nav.navigate_to_detail(PersonName::new("Bob"));
        check(&nav);
        nav.pop_back();
        check(&nav);
        nav.pop_back();
        check(&nav);
        nav.navigate("PersonDetails/Carol".parse().unwrap());
        check(&nav);
    }

    #[test]
    fn navigate_to_list_unwinds() {
        let mut nav = NavigationController::new();
        nav.navigate("PersonDetails/Alice".parse().unwrap());
        assert!(nav.navigate(Route::PersonList));
        assert!(!nav.navigate(Route::PersonList));
        assert_eq!(nav.state(), list_state());
    }
}
