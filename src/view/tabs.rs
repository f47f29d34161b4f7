use crate::model::Project;
use crate::state::ActivityTab;

use super::tables::{
    action_item_table, rfi_table, submittal_table, ActionItemRow, RfiRow, SubmittalRow, TableView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabHeader {
    pub tab: ActivityTab,
    pub label: &'static str,
    /// Number of entries; the count chip is hidden when zero.
    pub count: usize,
}

pub fn tab_headers(project: &Project) -> [TabHeader; 3] {
    ActivityTab::ALL.map(|tab| TabHeader {
        tab,
        label: tab.label(),
        count: match tab {
            ActivityTab::Rfis => project.rfis.len(),
            ActivityTab::Submittals => project.submittals.len(),
            ActivityTab::ActionItems => project.action_items.len(),
        },
    })
}

/// Content of the active activity tab.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityView {
    Rfis(TableView<RfiRow>),
    Submittals(TableView<SubmittalRow>),
    ActionItems(TableView<ActionItemRow>),
}

impl ActivityView {
    pub fn derive(project: &Project, tab: ActivityTab) -> Self {
        match tab {
            ActivityTab::Rfis => ActivityView::Rfis(rfi_table(&project.rfis)),
            ActivityTab::Submittals => ActivityView::Submittals(submittal_table(&project.submittals)),
            ActivityTab::ActionItems => {
                ActivityView::ActionItems(action_item_table(&project.action_items))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::fixtures;
    use crate::view::tables::NO_SUBMITTALS;

    #[test]
    fn headers_count_each_collection() {
        let project = fixtures::project("P");
        let headers = tab_headers(&project);
        assert_eq!(headers[0].label, "RFIs");
        assert_eq!(headers[0].count, 2);
        assert_eq!(headers[1].count, 0);
        assert_eq!(headers[2].tab, ActivityTab::ActionItems);
    }

    #[test]
    fn active_tab_selects_content() {
        let project = fixtures::project("P");
        match ActivityView::derive(&project, ActivityTab::Submittals) {
            ActivityView::Submittals(view) => {
                assert_eq!(view, TableView::Empty { placeholder: NO_SUBMITTALS })
            }
            other => panic!("unexpected view {other:?}"),
        }
        match ActivityView::derive(&project, ActivityTab::Rfis) {
            ActivityView::Rfis(view) => assert_eq!(view.rows().len(), 2),
            other => panic!("unexpected view {other:?}"),
        }
    }
}
