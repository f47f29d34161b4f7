use serde::{Deserialize, Serialize};

/// Planned vs. actual completion for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSample {
    pub month: String,
    pub planned: f64,
    pub actual: f64,
}
