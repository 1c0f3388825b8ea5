//! # People In Space SDK
//!
//! Data layer behind the People In Space screens.
//!
//! The SDK provides:
//!
//! * [`ViewModelFacade`] — the only interface the screens use: live
//!   people/position values plus synchronous photo, bio and record lookups.
//! * [`PeopleInSpaceRepository`] — cached facade implementation that
//!   normalises fetch failures into unchanged or empty values.
//! * [`PeopleInSpaceApi`] — HTTP client for the open-notify endpoints.
//! * [`Poller`] — background tasks refreshing the repository.
//! * [`PersonDirectory`] — name-keyed photo and bio table.
//! * [`SdkError`] — unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use peopleinspace_sdk::{
//!     PeopleInSpaceApi, PeopleInSpaceRepository, PersonDirectory, PollIntervals, Poller,
//!     ViewModelFacade,
//! };
//!
//! # async fn run() -> Result<(), peopleinspace_sdk::SdkError> {
//! let api = PeopleInSpaceApi::new("http://api.open-notify.org", Duration::from_secs(10))?;
//! let repo = Arc::new(PeopleInSpaceRepository::new(PersonDirectory::load(None)?));
//! let _poller = Poller::spawn(Arc::clone(&repo), api, PollIntervals::default());
//!
//! let mut people = repo.observe_people_in_space();
//! people.changed().await.ok();
//! println!("{} people in space", people.borrow().len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod directory;
pub mod endpoints;
pub mod error;
pub mod facade;
pub mod poller;
pub mod repository;

pub use client::PeopleInSpaceApi;
pub use directory::{PersonDirectory, PersonProfile};
pub use endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use error::SdkError;
pub use facade::ViewModelFacade;
pub use poller::{PollIntervals, Poller};
pub use repository::PeopleInSpaceRepository;

// Re-export model types for ergonomic usage.
pub use peopleinspace_models::{PersonName, PersonRecord, PositionRecord, Route};
