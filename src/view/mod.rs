//! Pure derivations from a [`Project`] to what each panel draws.
//!
//! Nothing in here mutates its input; the UI calls these every frame.

pub mod financial;
pub mod header;
pub mod map;
pub mod overview;
pub mod progress;
pub mod tables;
pub mod tabs;

use crate::model::Project;
use crate::state::ActivityTab;

pub use financial::FinancialSummary;
pub use header::ProjectSummary;
pub use overview::{overview_cards, OverviewCard};
pub use progress::ProgressSeries;
pub use tabs::{ActivityView, TabHeader};

/// Every derived view of one project, as a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub summary: ProjectSummary,
    pub cards: [OverviewCard; 4],
    pub financial: FinancialSummary,
    pub progress: ProgressSeries,
    pub markers: Vec<map::Marker>,
    pub locations: tables::TableView<tables::LocationRow>,
    pub tabs: [TabHeader; 3],
    pub activity: ActivityView,
}

impl DashboardView {
    pub fn derive(project: &Project, tab: ActivityTab) -> Self {
        Self {
            summary: ProjectSummary::derive(project),
            cards: overview_cards(&project.contract),
            financial: FinancialSummary::derive(&project.contract),
            progress: ProgressSeries::derive(&project.progress),
            markers: map::markers(&project.locations),
            locations: tables::location_table(&project.locations),
            tabs: tabs::tab_headers(project),
            activity: ActivityView::derive(project, tab),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::fixtures;

    #[test]
    fn derivation_is_idempotent_and_leaves_input_untouched() {
        let project = fixtures::project("P");
        let snapshot = project.clone();
        for tab in ActivityTab::ALL {
            let first = DashboardView::derive(&project, tab);
            let second = DashboardView::derive(&project, tab);
            assert_eq!(first, second);
        }
        assert_eq!(project, snapshot);
    }
}
