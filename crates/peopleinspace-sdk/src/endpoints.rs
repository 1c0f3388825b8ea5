//! Canonical endpoint definitions for the open-notify API.
//!
//! Every URL the SDK requests is built through [`Endpoints`], so the path
//! layout lives in exactly one place.
//!
//! # Layout
//!
//! ```text
//! {base}/astros.json   ← people currently in space
//! {base}/iss-now.json  ← current station position
//! ```

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://api.open-notify.org";

/// URL builder for a single API deployment.
///
/// # Examples
///
/// ```
/// use peopleinspace_sdk::Endpoints;
///
/// let ep = Endpoints::new("http://localhost:8080/");
/// assert_eq!(ep.astros(), "http://localhost:8080/astros.json");
/// assert_eq!(ep.iss_now(), "http://localhost:8080/iss-now.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Build endpoints under `base`. A trailing slash is ignored.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// The normalised base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// People currently in space.
    pub fn astros(&self) -> String {
        format!("{}/astros.json", self.base)
    }

    /// Current station position.
    pub fn iss_now(&self) -> String {
        format!("{}/iss-now.json", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_open_notify() {
        let ep = Endpoints::default();
        assert_eq!(ep.astros(), "http://api.open-notify.org/astros.json");
        assert_eq!(ep.iss_now(), "http://api.open-notify.org/iss-now.json");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let ep = Endpoints::new("https://mirror.example.com/api//");
        assert_eq!(ep.base(), "https://mirror.example.com/api");
        assert_eq!(ep.astros(), "https://mirror.example.com/api/astros.json");
    }
}
