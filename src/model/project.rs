use std::fmt;

use serde::{Deserialize, Serialize};

use super::activity::{ActionItem, Rfi, Submittal};
use super::location::Location;
use super::progress::ProgressSample;

/// Overall schedule health reported for a project.
///
/// Parsed case-insensitively; any other text is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    OnTrack,
    AtRisk,
    Behind,
    Other(String),
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::OnTrack => "On Track",
            ProjectStatus::AtRisk => "At Risk",
            ProjectStatus::Behind => "Behind",
            ProjectStatus::Other(text) => text.as_str(),
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(text: String) -> Self {
        match text.to_lowercase().as_str() {
            "on track" => ProjectStatus::OnTrack,
            "at risk" => ProjectStatus::AtRisk,
            "behind" => ProjectStatus::Behind,
            _ => ProjectStatus::Other(text),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(text) => text,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contract money, in whole US dollars.
///
/// The data source is expected to keep `remaining == total - invoiced`, but
/// nothing here enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub total: f64,
    pub invoiced: f64,
    pub paid: f64,
    pub remaining: f64,
}

impl Contract {
    /// Amount invoiced but not yet paid.
    pub fn outstanding(&self) -> f64 {
        self.invoiced - self.paid
    }
}

/// A construction project together with everything it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub customer: String,
    pub status: ProjectStatus,
    /// ISO-8601 date, parsed only for display.
    pub start_date: String,
    /// ISO-8601 date, parsed only for display.
    pub end_date: String,
    pub contract: Contract,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub rfis: Vec<Rfi>,
    #[serde(default)]
    pub submittals: Vec<Submittal>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default)]
    pub progress: Vec<ProgressSample>,
}

impl Project {
    /// Text shown for this project in the project picker.
    pub fn selector_label(&self) -> String {
        format!("{} - {}", self.name, self.customer)
    }
}

/// Top-level shape of the projects data document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsDocument {
    pub projects: Vec<Project>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::model::{LocationStatus, Rfi};

    pub fn location(id: &str, lat: f64, lng: f64, status: LocationStatus) -> Location {
        Location {
            id: id.to_string(),
            name: format!("Site {id}"),
            address: format!("{id} Main St"),
            lat,
            lng,
            status,
            completion: 50.0,
            last_updated: "2024-03-01".to_string(),
        }
    }

    pub fn rfi(number: &str, days_open: f64) -> Rfi {
        Rfi {
            number: number.to_string(),
            subject: format!("Question {number}"),
            days_open,
            assigned_to: "Architect".to_string(),
            status: "Open".to_string(),
            category: "Structural".to_string(),
        }
    }

    pub fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {id}"),
            customer: "Acme Corp".to_string(),
            status: ProjectStatus::OnTrack,
            start_date: "2024-01-15".to_string(),
            end_date: "2024-12-20".to_string(),
            contract: Contract {
                total: 100_000.0,
                invoiced: 60_000.0,
                paid: 40_000.0,
                remaining: 40_000.0,
            },
            locations: vec![
                location("L1", 37.77, -122.42, LocationStatus::Complete),
                location("L2", 37.80, -122.27, LocationStatus::InProgress),
            ],
            rfis: vec![rfi("RFI-001", 2.0), rfi("RFI-002", 9.0)],
            submittals: Vec::new(),
            action_items: Vec::new(),
            progress: vec![
                ProgressSample {
                    month: "Jan".to_string(),
                    planned: 10.0,
                    actual: 8.0,
                },
                ProgressSample {
                    month: "Feb".to_string(),
                    planned: 25.0,
                    actual: 22.0,
                },
            ],
        }
    }
}
