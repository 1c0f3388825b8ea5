//! Screen routes addressable by path.
//!
//! The host shell knows exactly two destinations:
//!
//! | Path | Screen |
//! |------|--------|
//! | `PersonList` | list of people plus the station position |
//! | `PersonDetails/{name}` | one person's details |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::person::PersonName;

/// The screen family a [`Route`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter)]
pub enum Screen {
    /// The people list.
    #[strum(serialize = "PersonList")]
    List,
    /// A single person's details.
    #[strum(serialize = "PersonDetails")]
    Detail,
}

/// A navigable destination.
///
/// # Examples
///
/// ```
/// use peopleinspace_models::{PersonName, Route};
///
/// let r: Route = "PersonDetails/Alice".parse().unwrap();
/// assert_eq!(r, Route::PersonDetails(PersonName::new("Alice")));
/// assert_eq!(Route::PersonList.to_string(), "PersonList");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    /// `PersonList`
    PersonList,
    /// `PersonDetails/{name}`
    PersonDetails(PersonName),
}

impl Route {
    /// The route the application starts on.
    pub const START: Route = Route::PersonList;

    /// Which screen this route shows.
    pub fn screen(&self) -> Screen {
        match self {
            Route::PersonList => Screen::List,
            Route::PersonDetails(_) => Screen::Detail,
        }
    }

    /// The person this route is keyed by, if any.
    pub fn person(&self) -> Option<&PersonName> {
        match self {
            Route::PersonList => None,
            Route::PersonDetails(name) => Some(name),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::PersonList => write!(f, "{}", Screen::List),
            Route::PersonDetails(name) => write!(f, "{}/{}", Screen::Detail, name),
        }
    }
}

impl FromStr for Route {
    type Err = ModelError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || ModelError::UnknownRoute {
            path: path.to_string(),
        };
        let (head, tail) = match path.split_once('/') {
            Some((head, tail)) => (head, Some(tail)),
            None => (path, None),
        };
        match (Screen::from_str(head).map_err(|_| unknown())?, tail) {
            (Screen::List, None) => Ok(Route::PersonList),
            (Screen::Detail, Some(name)) => Ok(Route::PersonDetails(name.parse()?)),
            _ => Err(unknown()),
        }
    }
}

impl TryFrom<String> for Route {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_route_roundtrip() {
        let r: Route = "PersonList".parse().unwrap();
        assert_eq!(r, Route::PersonList);
        assert_eq!(r.to_string(), "PersonList");
        assert_eq!(r.screen(), Screen::List);
        assert!(r.person().is_none());
    }

    #[test]
    fn detail_route_keeps_full_name() {
        let r: Route = "PersonDetails/Jasmin Moghbeli".parse().unwrap();
        assert_eq!(r.person().unwrap().as_str(), "Jasmin Moghbeli");
        assert_eq!(r.to_string(), "PersonDetails/Jasmin Moghbeli");
    }

    #[test]
    fn detail_route_requires_a_name() {
        assert!(matches!(
            "PersonDetails".parse::<Route>(),
            Err(ModelError::UnknownRoute { .. })
        ));
        assert!(matches!(
            "PersonDetails/".parse::<Route>(),
            Err(ModelError::InvalidPersonName { .. })
        ));
    }

    #[test]
    fn unknown_routes_are_rejected() {
        assert!("Settings".parse::<Route>().is_err());
        assert!("PersonList/Alice".parse::<Route>().is_err());
        assert!("".parse::<Route>().is_err());
    }

    #[test]
    fn route_serde_as_path() {
        let r = Route::PersonDetails(PersonName::new("Bob"));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"PersonDetails/Bob\"");
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn screen_names() {
        use strum::IntoEnumIterator;
        let names: Vec<_> = Screen::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["PersonList", "PersonDetails"]);
    }
}
