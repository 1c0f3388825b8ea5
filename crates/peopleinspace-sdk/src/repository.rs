//! Cached implementation of [`ViewModelFacade`].
//!
//! The repository owns the two published values. Fetch results are
//! applied through [`apply_people`](PeopleInSpaceRepository::apply_people)
//! and [`apply_position`](PeopleInSpaceRepository::apply_position), which
//! is where upstream failures get normalised:
//!
//! | Outcome | Published value |
//! |---------|-----------------|
//! | success | the fetched value (an empty list is a valid value) |
//! | failure | unchanged: last good value, or the initial default |
//!
//! Publishing a value equal to the current one does not wake subscribers.

use peopleinspace_models::{PersonName, PersonRecord, PositionRecord};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::client::PeopleInSpaceApi;
use crate::directory::{PersonDirectory, PersonProfile};
use crate::error::SdkError;
use crate::facade::ViewModelFacade;

/// In-memory cache of the latest feed plus the person directory.
#[derive(Debug)]
pub struct PeopleInSpaceRepository {
    people: watch::Sender<Vec<PersonRecord>>,
    position: watch::Sender<PositionRecord>,
    directory: PersonDirectory,
}

impl PeopleInSpaceRepository {
    /// Empty feed, default position.
    pub fn new(directory: PersonDirectory) -> Self {
        let (people, _) = watch::channel(Vec::new());
        let (position, _) = watch::channel(PositionRecord::default());
        Self {
            people,
            position,
            directory,
        }
    }

    /// A repository pre-filled with a fixed crew, for offline use.
    pub fn demo(mut directory: PersonDirectory) -> Self {
        let crew = [
            ("Chris Cassidy", "ISS"),
            ("Anatoly Ivanishin", "ISS"),
            ("Ivan Vagner", "ISS"),
        ];
        let profile = PersonProfile {
            image_url: "https://example.com/people/chris-cassidy.jpg".into(),
            ..directory.get("Chris Cassidy").cloned().unwrap_or_default()
        };
        directory.insert("Chris Cassidy", profile);
        let repo = Self::new(directory);
        repo.publish_people(
            crew.iter()
                .map(|(name, craft)| PersonRecord::new(PersonName::new(name), *craft))
                .collect(),
        );
        repo.publish_position(PositionRecord::new(51.6416, -0.1276));
        repo
    }

    /// The directory used for photo and bio lookups.
    pub fn directory(&self) -> &PersonDirectory {
        &self.directory
    }

    /// Replace the published collection. Returns whether it changed.
    pub fn publish_people(&self, people: Vec<PersonRecord>) -> bool {
        self.people.send_if_modified(|current| {
            if *current == people {
                return false;
            }
            *current = people;
            true
        })
    }

    /// Replace the published position. Returns whether it changed.
    pub fn publish_position(&self, position: PositionRecord) -> bool {
        self.position.send_if_modified(|current| {
            if *current == position {
                return false;
            }
            *current = position;
            true
        })
    }

    /// Apply a people fetch result, keeping the last good value on error.
    pub fn apply_people(&self, result: Result<Vec<PersonRecord>, SdkError>) {
        match result {
            Ok(people) => {
                let count = people.len();
                if self.publish_people(people) {
                    info!(count, "people in space updated");
                }
            }
            Err(e) => {
                let kept = self.people.borrow().len();
                warn!(error = %e, kept, "people refresh failed, keeping last collection");
            }
        }
    }

    /// Apply a position fetch result, keeping the last good value on error.
    pub fn apply_position(&self, result: Result<PositionRecord, SdkError>) {
        match result {
            Ok(position) => {
                self.publish_position(position);
            }
            Err(e) => {
                let kept = *self.position.borrow();
                warn!(error = %e, %kept, "position refresh failed, keeping last fix");
            }
        }
    }

    /// Fetch and apply the people collection.
    pub async fn refresh_people(&self, api: &PeopleInSpaceApi) {
        self.apply_people(api.fetch_people().await);
    }

    /// Fetch and apply the station position.
    pub async fn refresh_position(&self, api: &PeopleInSpaceApi) {
        self.apply_position(api.fetch_position().await);
    }

    /// Fetch both values concurrently.
    pub async fn refresh_all(&self, api: &PeopleInSpaceApi) {
        tokio::join!(self.refresh_people(api), self.refresh_position(api));
    }
}

impl ViewModelFacade for PeopleInSpaceRepository {
    fn observe_people_in_space(&self) -> watch::Receiver<Vec<PersonRecord>> {
        self.people.subscribe()
    }

    fn observe_position(&self) -> watch::Receiver<PositionRecord> {
        self.position.subscribe()
    }

    fn person_image_url(&self, name: &str) -> String {
        self.directory.image_url(name)
    }

    fn person(&self, name: &str) -> Option<PersonRecord> {
        self.people
            .borrow()
            .iter()
            .find(|p| p.name() == name)
            .cloned()
    }

    fn person_bio(&self, name: &str) -> String {
        self.directory.bio(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_bob() -> Vec<PersonRecord> {
        vec![
            PersonRecord::try_new("Alice", "Soyuz").unwrap(),
            PersonRecord::try_new("Bob", "Dragon").unwrap(),
        ]
    }

    fn api_failure() -> SdkError {
        SdkError::Api {
            endpoint: "http://test/astros.json".into(),
            message: "failure".into(),
        }
    }

    #[test]
    fn starts_empty_with_default_position() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        assert!(repo.observe_people_in_space().borrow().is_empty());
        assert_eq!(*repo.observe_position().borrow(), PositionRecord::new(0.0, 0.0));
    }

    #[test]
    fn lookups_resolve_against_latest_collection() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        repo.publish_people(alice_bob());
        assert_eq!(repo.person("Bob").unwrap().craft(), "Dragon");
        assert!(repo.person("Carol").is_none());

        repo.publish_people(vec![PersonRecord::try_new("Carol", "ISS").unwrap()]);
        assert!(repo.person("Bob").is_none());
        assert!(repo.person("Carol").is_some());
    }

    #[test]
    fn unknown_names_give_empty_strings() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        assert_eq!(repo.person_image_url("Alice"), "");
        assert_eq!(repo.person_bio("Alice"), "");
    }

    #[test]
    fn failed_people_fetch_keeps_last_collection() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        repo.apply_people(Ok(alice_bob()));
        repo.apply_people(Err(api_failure()));
        assert_eq!(*repo.observe_people_in_space().borrow(), alice_bob());
    }

    #[test]
    fn failed_first_fetch_stays_empty() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        repo.apply_people(Err(api_failure()));
        repo.apply_position(Err(api_failure()));
        assert!(repo.observe_people_in_space().borrow().is_empty());
        assert_eq!(*repo.observe_position().borrow(), PositionRecord::default());
    }

    #[test]
    fn successful_empty_fetch_clears_collection() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        repo.apply_people(Ok(alice_bob()));
        repo.apply_people(Ok(Vec::new()));
        assert!(repo.observe_people_in_space().borrow().is_empty());
    }

    #[test]
    fn failed_position_fetch_keeps_last_fix() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        repo.apply_position(Ok(PositionRecord::new(1.0, 2.0)));
        repo.apply_position(Err(api_failure()));
        assert_eq!(*repo.observe_position().borrow(), PositionRecord::new(1.0, 2.0));
    }

    #[test]
    fn identical_publish_does_not_notify() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        let mut rx = repo.observe_people_in_space();
        assert!(repo.publish_people(alice_bob()));
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();
        assert!(!repo.publish_people(alice_bob()));
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscribers_see_updates() {
        let repo = PeopleInSpaceRepository::new(PersonDirectory::default());
        let mut rx = repo.observe_position();
        repo.publish_position(PositionRecord::new(10.0, 20.0));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), PositionRecord::new(10.0, 20.0));
    }

    #[test]
    fn demo_repository_has_crew_and_a_photo() {
        let repo = PeopleInSpaceRepository::demo(PersonDirectory::bundled().unwrap());
        assert_eq!(repo.observe_people_in_space().borrow().len(), 3);
        assert!(!repo.person_image_url("Chris Cassidy").is_empty());
        assert!(!repo.person_bio("Chris Cassidy").is_empty());
        assert_eq!(repo.person_image_url("Ivan Vagner"), "");
    }
}
