//! The boundary the screens talk to.
//!
//! Screens receive a [`ViewModelFacade`] explicitly and never see the
//! HTTP client, the refresh loop or any error type. Every value coming
//! out of the facade is total: an empty collection, an absent record or
//! an empty string stands for "nothing to show".

use peopleinspace_models::{PersonRecord, PositionRecord};
use tokio::sync::watch;

/// Live data and synchronous lookups for the people-in-space screens.
///
/// Lookups must be in-memory and non-blocking; they are called while
/// rendering.
pub trait ViewModelFacade: Send + Sync {
    /// Live collection of people, in feed order. Each update replaces the
    /// whole collection.
    fn observe_people_in_space(&self) -> watch::Receiver<Vec<PersonRecord>>;

    /// Live station position. `(0.0, 0.0)` until the first fix.
    fn observe_position(&self) -> watch::Receiver<PositionRecord>;

    /// Photo URL for `name`; empty when there is none.
    fn person_image_url(&self, name: &str) -> String;

    /// The current record for `name`, if it is in the latest collection.
    fn person(&self, name: &str) -> Option<PersonRecord>;

    /// Biography for `name`; empty when there is none.
    fn person_bio(&self, name: &str) -> String;
}
