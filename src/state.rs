//! Root UI state: load phase, selected project and active activity tab.

use std::collections::HashSet;

use crate::io::LoadError;
use crate::model::Project;

/// Tabs of the project activity panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityTab {
    #[default]
    Rfis,
    Submittals,
    ActionItems,
}

impl ActivityTab {
    pub const ALL: [ActivityTab; 3] = [
        ActivityTab::Rfis,
        ActivityTab::Submittals,
        ActivityTab::ActionItems,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityTab::Rfis => "RFIs",
            ActivityTab::Submittals => "Submittals",
            ActivityTab::ActionItems => "Action Items",
        }
    }
}

/// Loaded projects plus which one is on screen.
#[derive(Debug, Clone)]
pub struct Selection {
    projects: Vec<Project>,
    selected: usize,
    pub active_tab: ActivityTab,
}

impl Selection {
    /// Selects the first project. Returns `None` when there is nothing to show.
    pub fn new(projects: Vec<Project>) -> Option<Self> {
        if projects.is_empty() {
            return None;
        }
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                log::warn!("project id {:?} appears more than once", project.id);
            }
        }
        Some(Self {
            projects,
            selected: 0,
            active_tab: ActivityTab::default(),
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected(&self) -> &Project {
        &self.projects[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> &str {
        &self.selected().id
    }

    /// Switch to the project at `index` in load order. Projects are picked by
    /// position since ids may repeat. Out-of-range indices leave the
    /// selection as is.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.projects.len() {
            self.selected = index;
            true
        } else {
            log::warn!("ignoring selection of unknown project #{index}");
            false
        }
    }

    pub fn set_tab(&mut self, tab: ActivityTab) {
        self.active_tab = tab;
    }
}

/// Coarse application state. `Failed` is terminal.
#[derive(Debug)]
pub enum LoadPhase {
    Loading,
    Ready(Selection),
    Failed(String),
}

impl LoadPhase {
    pub fn from_result(result: Result<Vec<Project>, LoadError>) -> Self {
        match result {
            Ok(projects) => {
                let count = projects.len();
                match Selection::new(projects) {
                    Some(selection) => {
                        log::info!("loaded {count} projects");
                        LoadPhase::Ready(selection)
                    }
                    None => LoadPhase::failed(&LoadError::NoProjects),
                }
            }
            Err(err) => LoadPhase::failed(&err),
        }
    }

    fn failed(err: &LoadError) -> Self {
        log::warn!("project load failed: {err}");
        LoadPhase::Failed(err.user_message().to_string())
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            LoadPhase::Ready(selection) => Some(selection),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::source::{FAILED_TO_LOAD, NO_PROJECTS};
    use crate::model::project::fixtures;
    use crate::view::DashboardView;

    fn selection() -> Selection {
        let mut b = fixtures::project("B");
        b.rfis.clear();
        b.contract.paid = 10_000.0;
        Selection::new(vec![fixtures::project("A"), b]).unwrap()
    }

    #[test]
    fn first_project_and_rfi_tab_are_default() {
        let selection = selection();
        assert_eq!(selection.selected_id(), "A");
        assert_eq!(selection.active_tab, ActivityTab::Rfis);
        assert_eq!(selection.projects().len(), 2);
    }

    #[test]
    fn empty_project_list_has_no_selection() {
        assert!(Selection::new(Vec::new()).is_none());
    }

    #[test]
    fn unknown_project_is_rejected() {
        let mut selection = selection();
        assert!(!selection.select_index(2));
        assert_eq!(selection.selected_id(), "A");
        assert!(selection.select_index(1));
        assert_eq!(selection.selected_id(), "B");
        assert_eq!(selection.selected_index(), 1);
    }

    #[test]
    fn projects_sharing_an_id_are_each_selectable() {
        let mut twin = fixtures::project("A");
        twin.name = "Twin".to_string();
        let mut selection = Selection::new(vec![fixtures::project("A"), twin]).unwrap();

        assert!(selection.select_index(1));
        assert_eq!(selection.selected().name, "Twin");
        assert!(selection.select_index(0));
        assert_eq!(selection.selected().name, "Project A");
    }

    #[test]
    fn switching_away_and_back_restores_view() {
        let mut selection = selection();
        let before = DashboardView::derive(selection.selected(), selection.active_tab);

        assert!(selection.select_index(1));
        let other = DashboardView::derive(selection.selected(), selection.active_tab);
        assert_ne!(before, other);

        assert!(selection.select_index(0));
        let after = DashboardView::derive(selection.selected(), selection.active_tab);
        assert_eq!(before, after);
    }

    #[test]
    fn tab_switch_is_immediate() {
        let mut selection = selection();
        selection.set_tab(ActivityTab::ActionItems);
        assert_eq!(selection.active_tab, ActivityTab::ActionItems);
        assert_eq!(ActivityTab::ActionItems.label(), "Action Items");
    }

    #[test]
    fn load_results_map_to_phases() {
        let ready = LoadPhase::from_result(Ok(vec![fixtures::project("A")]));
        assert_eq!(ready.selection().map(|s| s.selected_id()), Some("A"));

        match LoadPhase::from_result(Ok(Vec::new())) {
            LoadPhase::Failed(message) => assert_eq!(message, NO_PROJECTS),
            other => panic!("expected failure, got {other:?}"),
        }

        let failed = LoadPhase::from_result(Err(LoadError::NoProjects));
        assert!(failed.selection().is_none());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match LoadPhase::from_result(Err(LoadError::Io {
            path: "projects.json".into(),
            source: io,
        })) {
            LoadPhase::Failed(message) => assert_eq!(message, FAILED_TO_LOAD),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
