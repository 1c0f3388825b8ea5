//! Name-keyed table of person photos and biographies.
//!
//! The open-notify feed only carries names and crafts. Photos and bios
//! come from a [`PersonDirectory`]: a bundled JSON document, optionally
//! overlaid by a user file at `<config_dir>/peopleinspace/people.json`.
//!
//! ```text
//! [
//!   {"name": "Alice", "image_url": "https://…/alice.jpg", "bio": "…"},
//!   …
//! ]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SdkError;

const APP_DIR: &str = "peopleinspace";
const DIRECTORY_FILE: &str = "people.json";
const BUNDLED: &str = include_str!("../data/people.json");

/// Photo and bio for one person. Empty strings mean "none".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Photo URL, or empty.
    #[serde(default)]
    pub image_url: String,
    /// Short biography, or empty.
    #[serde(default)]
    pub bio: String,
}

#[derive(Deserialize)]
struct DirectoryEntry {
    name: String,
    #[serde(flatten)]
    profile: PersonProfile,
}

/// In-memory lookup of [`PersonProfile`]s by exact name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonDirectory {
    entries: HashMap<String, PersonProfile>,
}

impl PersonDirectory {
    /// The directory shipped with the crate.
    pub fn bundled() -> Result<Self, SdkError> {
        Self::from_json_str(BUNDLED)
    }

    /// Parse a directory document.
    pub fn from_json_str(json: &str) -> Result<Self, SdkError> {
        let list: Vec<DirectoryEntry> = serde_json::from_str(json)?;
        let entries = list
            .into_iter()
            .map(|e| (e.name, e.profile))
            .collect();
        Ok(Self { entries })
    }

    /// Bundled entries, overlaid by a user file.
    ///
    /// With `path = None` the default location is tried and silently
    /// skipped when absent. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, SdkError> {
        let mut directory = Self::bundled()?;
        match path {
            Some(p) => directory.overlay_file(p)?,
            None => {
                if let Some(p) = default_overlay_path().filter(|p| p.exists()) {
                    directory.overlay_file(&p)?;
                }
            }
        }
        Ok(directory)
    }

    /// Merge entries from `path`; its entries replace existing ones.
    pub fn overlay_file(&mut self, path: &Path) -> Result<(), SdkError> {
        let content = fs::read_to_string(path)?;
        let overlay = Self::from_json_str(&content)?;
        info!(
            count = overlay.len(),
            path = %path.display(),
            "loaded person directory overlay"
        );
        self.merge(overlay);
        Ok(())
    }

    /// Merge another directory; its entries win.
    pub fn merge(&mut self, other: PersonDirectory) {
        self.entries.extend(other.entries);
    }

    /// Insert or replace a single entry.
    pub fn insert(&mut self, name: impl Into<String>, profile: PersonProfile) {
        self.entries.insert(name.into(), profile);
    }

    /// Profile for `name`, if known.
    pub fn get(&self, name: &str) -> Option<&PersonProfile> {
        let found = self.entries.get(name);
        if found.is_none() {
            debug!(name, "no directory entry");
        }
        found
    }

    /// Photo URL for `name`, empty when unknown.
    pub fn image_url(&self, name: &str) -> String {
        self.get(name).map(|p| p.image_url.clone()).unwrap_or_default()
    }

    /// Biography for `name`, empty when unknown.
    pub fn bio(&self, name: &str) -> String {
        self.get(name).map(|p| p.bio.clone()).unwrap_or_default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `<config_dir>/peopleinspace/people.json`, if a config dir exists.
pub fn default_overlay_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join(DIRECTORY_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_directory_parses() {
        let dir = PersonDirectory::bundled().unwrap();
        assert!(!dir.is_empty());
        assert!(!dir.bio("Chris Cassidy").is_empty());
    }

    #[test]
    fn unknown_names_are_empty_strings() {
        let dir = PersonDirectory::bundled().unwrap();
        assert_eq!(dir.image_url("Nobody"), "");
        assert_eq!(dir.bio("Nobody"), "");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let dir = PersonDirectory::from_json_str(r#"[{"name": "Alice"}]"#).unwrap();
        assert_eq!(dir.get("Alice"), Some(&PersonProfile::default()));
    }

    #[test]
    fn overlay_entries_win() {
        let mut dir = PersonDirectory::from_json_str(
            r#"[{"name": "Alice", "image_url": "a.png", "bio": "old"}]"#,
        )
        .unwrap();
        dir.merge(
            PersonDirectory::from_json_str(r#"[{"name": "Alice", "bio": "new"}]"#).unwrap(),
        );
        assert_eq!(dir.bio("Alice"), "new");
        assert_eq!(dir.image_url("Alice"), "");
    }

    #[test]
    fn overlay_file_is_read() {
        let path = std::env::temp_dir().join(format!(
            "peopleinspace-directory-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"[{"name": "Bob", "image_url": "https://example.com/bob.jpg"}]"#)
            .unwrap();
        let dir = PersonDirectory::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(dir.image_url("Bob"), "https://example.com/bob.jpg");
        assert!(!dir.bio("Ivan Vagner").is_empty());
    }

    #[test]
    fn explicit_missing_overlay_is_an_error() {
        let path = Path::new("/definitely/not/here/people.json");
        assert!(matches!(
            PersonDirectory::load(Some(path)),
            Err(SdkError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
