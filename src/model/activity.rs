use serde::{Deserialize, Serialize};

/// Request for Information raised against a project.
///
/// `number` is a display identifier and is not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfi {
    pub number: String,
    pub subject: String,
    /// Whole days in practice; kept as a float so odd values still load.
    pub days_open: f64,
    pub assigned_to: String,
    pub status: String,
    pub category: String,
}

/// A document or sample submitted for approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submittal {
    pub id: String,
    pub item: String,
    pub description: String,
    pub status: String,
    pub due_date: String,
    pub category: String,
}

/// A tracked task with an owner and due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub description: String,
    pub owner: String,
    pub due_date: String,
    pub status: String,
    pub category: String,
}
