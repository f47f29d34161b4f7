use std::fmt;

use serde::{Deserialize, Serialize};

/// Build state of a single project location.
///
/// Parsed case-insensitively; any other text is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationStatus {
    Complete,
    InProgress,
    NotStarted,
    Other(String),
}

impl LocationStatus {
    pub fn label(&self) -> &str {
        match self {
            LocationStatus::Complete => "Complete",
            LocationStatus::InProgress => "In Progress",
            LocationStatus::NotStarted => "Not Started",
            LocationStatus::Other(text) => text.as_str(),
        }
    }
}

impl From<String> for LocationStatus {
    fn from(text: String) -> Self {
        match text.to_lowercase().as_str() {
            "complete" => LocationStatus::Complete,
            "in progress" => LocationStatus::InProgress,
            "not started" => LocationStatus::NotStarted,
            _ => LocationStatus::Other(text),
        }
    }
}

impl From<LocationStatus> for String {
    fn from(status: LocationStatus) -> Self {
        match status {
            LocationStatus::Other(text) => text,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A physical site belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub status: LocationStatus,
    /// Percent complete, 0 to 100.
    pub completion: f64,
    /// ISO-8601 timestamp, parsed only for display.
    pub last_updated: String,
}
