use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::format::format_long_date;
use crate::state::{ActivityTab, Selection};
use crate::ui::location_map::LocationMap;
use crate::ui::{
    activity_tabs, financial_chart, location_table, overview_cards, progress_chart,
    project_selector, theme,
};
use crate::view::header::project_options;
use crate::view::tables::location_count_caption;
use crate::view::DashboardView;

/// Below this width the two-column rows stack vertically.
const WIDE_LAYOUT_MIN: f32 = 900.0;
const MAX_CONTENT_WIDTH: f32 = 1280.0;

/// Actions the dashboard can request from the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    /// Index into the loaded project list.
    SelectProject(usize),
    SelectTab(ActivityTab),
}

/// Render the dashboard for the selected project.
pub fn show_dashboard(
    ui: &mut Ui,
    selection: &Selection,
    map: &mut LocationMap,
    today: NaiveDate,
) -> DashboardAction {
    let project = selection.selected();
    let view = DashboardView::derive(project, selection.active_tab);
    let options = project_options(selection.projects());
    let mut action = DashboardAction::None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let margin = ((ui.available_width() - MAX_CONTENT_WIDTH) / 2.0).max(16.0);
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(margin, 24.0))
                .show(ui, |ui| {
                    if let Some(index) = project_selector::show_project_selector(
                        ui,
                        &options,
                        selection.selected_index(),
                        &view.summary,
                    ) {
                        action = DashboardAction::SelectProject(index);
                    }
                    ui.add_space(theme::SECTION_GAP);

                    overview_cards::show_overview_cards(ui, &view.cards);
                    ui.add_space(theme::SECTION_GAP);

                    let caption = location_count_caption(&project.locations);
                    if ui.available_width() >= WIDE_LAYOUT_MIN {
                        ui.columns(2, |cols| {
                            progress_chart::show_progress_chart(&mut cols[0], &view.progress);
                            financial_chart::show_financial_chart(&mut cols[1], &view.financial);
                        });
                        ui.add_space(theme::SECTION_GAP);
                        ui.columns(2, |cols| {
                            map.show(&mut cols[0], &project.id, &view.markers);
                            location_table::show_location_table(&mut cols[1], &caption, &view.locations);
                        });
                    } else {
                        progress_chart::show_progress_chart(ui, &view.progress);
                        ui.add_space(theme::SECTION_GAP);
                        financial_chart::show_financial_chart(ui, &view.financial);
                        ui.add_space(theme::SECTION_GAP);
                        map.show(ui, &project.id, &view.markers);
                        ui.add_space(theme::SECTION_GAP);
                        location_table::show_location_table(ui, &caption, &view.locations);
                    }
                    ui.add_space(theme::SECTION_GAP);

                    if let Some(tab) = activity_tabs::show_activity_tabs(
                        ui,
                        &view.tabs,
                        selection.active_tab,
                        &view.activity,
                    ) {
                        if action == DashboardAction::None {
                            action = DashboardAction::SelectTab(tab);
                        }
                    }

                    ui.add_space(24.0);
                    show_footer(ui, today);
                });
        });

    action
}

fn show_footer(ui: &mut Ui, today: NaiveDate) {
    let p = theme::palette(ui.ctx());
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Questions about your project? Contact your project manager.")
                .font(theme::font_body())
                .color(p.text_dim),
        );
        ui.label(
            RichText::new(format!("Last updated: {}", format_long_date(today)))
                .font(theme::font_body())
                .color(p.text_dim),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::fixtures;
    use crate::model::LocationStatus;

    fn render(selection: &Selection, map: &mut LocationMap) -> DashboardAction {
        let ctx = egui::Context::default();
        theme::apply_theme(&ctx, false);
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut action = DashboardAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = show_dashboard(ui, selection, map, today);
            });
        });
        action
    }

    #[test]
    fn renders_headless_without_input() {
        let mut project = fixtures::project("A");
        project.locations = vec![
            fixtures::location("L1", 40.0, -74.0, LocationStatus::Complete),
            fixtures::location("L2", 40.0, -74.0, LocationStatus::NotStarted),
        ];
        let selection = Selection::new(vec![project, fixtures::project("B")]).unwrap();
        let mut map = LocationMap::new();

        assert_eq!(render(&selection, &mut map), DashboardAction::None);
        assert_eq!(render(&selection, &mut map), DashboardAction::None);

        assert_eq!(map.builds(), 1);
        let surface = map.surface().unwrap();
        assert_eq!(surface.project_id(), "A");
        assert_eq!(surface.markers().len(), 2);
    }

    #[test]
    fn switching_projects_rebuilds_the_map() {
        let mut selection =
            Selection::new(vec![fixtures::project("A"), fixtures::project("B")]).unwrap();
        let mut map = LocationMap::new();
        render(&selection, &mut map);

        assert!(selection.select_index(1));
        selection.set_tab(ActivityTab::Submittals);
        render(&selection, &mut map);

        assert_eq!(map.builds(), 2);
        assert_eq!(map.surface().map(|s| s.project_id()), Some("B"));
    }

    #[test]
    fn empty_project_renders_placeholders() {
        let mut project = fixtures::project("A");
        project.locations.clear();
        project.rfis.clear();
        project.progress.clear();
        let selection = Selection::new(vec![project]).unwrap();
        let mut map = LocationMap::new();
        assert_eq!(render(&selection, &mut map), DashboardAction::None);
        assert!(map.surface().unwrap().bounds().is_none());
    }
}
