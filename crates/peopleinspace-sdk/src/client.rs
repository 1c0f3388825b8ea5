//! HTTP client for the open-notify API.
//!
//! [`PeopleInSpaceApi`] performs one request per call and hands back
//! model types. It keeps no state between calls; caching and failure
//! normalisation are the job of
//! [`PeopleInSpaceRepository`](crate::PeopleInSpaceRepository).
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use peopleinspace_sdk::PeopleInSpaceApi;
//!
//! # async fn run() -> Result<(), peopleinspace_sdk::SdkError> {
//! let api = PeopleInSpaceApi::new("http://api.open-notify.org", Duration::from_secs(10))?;
//! for person in api.fetch_people().await? {
//!     println!("{} ({})", person.name(), person.craft());
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use peopleinspace_models::{AstrosResponse, IssNowResponse, PersonRecord, PositionRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoints::Endpoints;
use crate::error::SdkError;

/// Stateless client for the two open-notify endpoints.
#[derive(Clone, Debug)]
pub struct PeopleInSpaceApi {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl PeopleInSpaceApi {
    /// Build a client for `base_url` with a per-request `timeout`.
    ///
    /// Only `http://` and `https://` URLs are accepted.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SdkError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "API URL must start with http:// or https://, got \"{base_url}\""
            )));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoints: Endpoints::new(base_url),
        })
    }

    /// The endpoints this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the people currently in space, in feed order.
    pub async fn fetch_people(&self) -> Result<Vec<PersonRecord>, SdkError> {
        let url = self.endpoints.astros();
        let body: AstrosResponse = self.get_json(&url).await?;
        if !body.is_success() {
            return Err(SdkError::Api {
                endpoint: url,
                message: body.message,
            });
        }
        let people = body.into_people();
        debug!(count = people.len(), "fetched people in space");
        Ok(people)
    }

    /// Fetch the current station position.
    pub async fn fetch_position(&self) -> Result<PositionRecord, SdkError> {
        let url = self.endpoints.iss_now();
        let body: IssNowResponse = self.get_json(&url).await?;
        if !body.is_success() {
            return Err(SdkError::Api {
                endpoint: url,
                message: body.message,
            });
        }
        debug!(position = %body.position(), at = %body.timestamp, "fetched station position");
        Ok(body.position())
    }

    /// Low-level: GET `url`, fail on non-2xx, decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SdkError> {
        let res = self.http.get(url).send().await?.error_for_status()?;
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
