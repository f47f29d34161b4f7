use crate::format::format_date;
use crate::model::Project;

use super::tables::Badge;

/// One entry of the project picker, in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOption {
    pub label: String,
}

pub fn project_options(projects: &[Project]) -> Vec<ProjectOption> {
    projects
        .iter()
        .map(|p| ProjectOption {
            label: p.selector_label(),
        })
        .collect()
}

/// Status badge and the summary fields under the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub selector_label: String,
    pub status: Badge,
    pub fields: [(&'static str, String); 4],
}

impl ProjectSummary {
    pub fn derive(project: &Project) -> Self {
        Self {
            selector_label: project.selector_label(),
            status: Badge::for_status(project.status.label()),
            fields: [
                ("Customer", project.customer.clone()),
                ("Project ID", project.id.clone()),
                ("Start Date", format_date(&project.start_date)),
                ("End Date", format_date(&project.end_date)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::fixtures;
    use crate::model::ProjectStatus;
    use crate::status::StatusTone;

    #[test]
    fn summary_formats_dates_and_status() {
        let mut project = fixtures::project("P-9");
        project.status = ProjectStatus::Behind;
        let summary = ProjectSummary::derive(&project);
        assert_eq!(summary.status.text, "Behind");
        assert_eq!(summary.status.tone, StatusTone::Critical);
        assert_eq!(summary.fields[1], ("Project ID", "P-9".to_string()));
        assert_eq!(summary.fields[2].1, "Jan 15, 2024");
        assert_eq!(summary.fields[3].1, "Dec 20, 2024");
    }

    #[test]
    fn options_follow_input_order() {
        let projects = vec![fixtures::project("Z"), fixtures::project("A")];
        let options = project_options(&projects);
        assert_eq!(options[0].label, "Project Z - Acme Corp");
        assert_eq!(options[1].label, "Project A - Acme Corp");
    }
}
