use crate::config::{AppSettings, SettingsStore};
use crate::io::ProjectLoader;
use crate::state::LoadPhase;
use crate::ui;
use crate::ui::dashboard::DashboardAction;
use crate::ui::location_map::LocationMap;

/// Main application state.
pub struct PortalApp {
    settings: AppSettings,
    settings_store: SettingsStore,
    phase: LoadPhase,
    loader: ProjectLoader,
    location_map: LocationMap,
    /// Appearance last pushed into the egui context.
    applied_dark_mode: Option<bool>,
}

impl PortalApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut app = Self::with_store(SettingsStore::discover());
        app.start_loading(&cc.egui_ctx);
        app
    }

    fn with_store(settings_store: SettingsStore) -> Self {
        let settings = settings_store.load();
        log::info!(
            "settings from {} (dark mode: {})",
            settings_store.path().display(),
            settings.dark_mode
        );
        let location_map = LocationMap::with_tiles(settings.tile_source());
        Self {
            settings,
            settings_store,
            phase: LoadPhase::Loading,
            loader: ProjectLoader::new(),
            location_map,
            applied_dark_mode: None,
        }
    }

    fn start_loading(&mut self, ctx: &egui::Context) {
        self.phase = LoadPhase::Loading;
        let ctx = ctx.clone();
        let started = self.loader.start(
            self.settings.data_source(),
            self.settings.request_timeout(),
            move || ctx.request_repaint(),
        );
        if let Err(err) = started {
            self.phase = LoadPhase::from_result(Err(err));
        }
    }

    fn poll_loader(&mut self) {
        if let Some(result) = self.loader.poll() {
            self.phase = LoadPhase::from_result(result);
        }
    }

    fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
        match self.settings_store.save(&self.settings) {
            Ok(()) => log::debug!("saved dark mode = {}", self.settings.dark_mode),
            Err(err) => log::warn!("could not persist settings: {err}"),
        }
    }

    fn apply_action(&mut self, action: DashboardAction) {
        let LoadPhase::Ready(selection) = &mut self.phase else {
            return;
        };
        match action {
            DashboardAction::SelectProject(index) => {
                if selection.select_index(index) {
                    log::debug!("selected project {}", selection.selected_id());
                }
            }
            DashboardAction::SelectTab(tab) => selection.set_tab(tab),
            DashboardAction::None => {}
        }
    }

    /// Draw one frame for the current phase and apply what it asked for.
    fn show_panels(&mut self, ctx: &egui::Context) {
        if self.applied_dark_mode != Some(self.settings.dark_mode) {
            ui::theme::apply_theme(ctx, self.settings.dark_mode);
            self.applied_dark_mode = Some(self.settings.dark_mode);
        }
        let palette = ui::theme::palette(ctx);

        // Top panel: title and appearance toggle
        if self.phase.selection().is_some() {
            let mut toggled = false;
            egui::TopBottomPanel::top("header")
                .frame(
                    egui::Frame::default()
                        .fill(palette.bg_card)
                        .inner_margin(egui::Margin::symmetric(24.0, 16.0))
                        .stroke(egui::Stroke::new(1.0, palette.border)),
                )
                .show(ctx, |ui| {
                    toggled = ui::header::show_header(ui, self.settings.dark_mode);
                });
            if toggled {
                self.toggle_dark_mode();
            }
        }

        // Central panel: loading, error or dashboard
        let today = chrono::Local::now().date_naive();
        let mut action = DashboardAction::None;
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(palette.bg_page))
            .show(ctx, |ui| match &self.phase {
                LoadPhase::Loading => {
                    self.location_map.release();
                    ui::status_screens::show_loading(ui);
                }
                LoadPhase::Failed(message) => {
                    self.location_map.release();
                    ui::status_screens::show_error(ui, message);
                }
                LoadPhase::Ready(selection) => {
                    action =
                        ui::dashboard::show_dashboard(ui, selection, &mut self.location_map, today);
                }
            });
        self.apply_action(action);
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        self.show_panels(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::source::FAILED_TO_LOAD;
    use crate::io::LoadError;
    use crate::model::project::fixtures;
    use crate::ui::status_screens::ERROR_TITLE;

    fn app(dir: &tempfile::TempDir) -> PortalApp {
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"map_tile_url": ""}"#).unwrap();
        PortalApp::with_store(SettingsStore::at(path))
    }

    fn collect_text(shape: &egui::Shape, out: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => out.push(text.galley.text().to_string()),
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    /// Every string painted in one headless frame.
    fn render(app: &mut PortalApp) -> Vec<String> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| app.show_panels(ctx));
        let mut text = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut text);
        }
        text
    }

    #[test]
    fn failed_load_shows_only_the_error_card() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        app.phase = LoadPhase::from_result(Err(LoadError::Io {
            path: "projects.json".into(),
            source: refused,
        }));

        let text = render(&mut app);
        assert!(text.iter().any(|t| t == ERROR_TITLE), "{text:?}");
        assert!(text.iter().any(|t| t == FAILED_TO_LOAD), "{text:?}");
        assert!(!text.iter().any(|t| t == "Customer Portal"));
        assert!(!text.iter().any(|t| t == "Select Project"));
        assert!(app.location_map.surface().is_none());
    }

    #[test]
    fn ready_phase_shows_header_and_selector() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        app.phase = LoadPhase::from_result(Ok(vec![fixtures::project("A")]));

        let text = render(&mut app);
        assert!(text.iter().any(|t| t == "Customer Portal"), "{text:?}");
        assert!(text.iter().any(|t| t == "Select Project"), "{text:?}");
        assert!(!text.iter().any(|t| t == ERROR_TITLE));
    }

    #[test]
    fn picking_a_project_by_position_switches_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        app.phase = LoadPhase::from_result(Ok(vec![
            fixtures::project("A"),
            fixtures::project("A"),
        ]));
        app.apply_action(DashboardAction::SelectProject(1));
        assert_eq!(app.phase.selection().map(|s| s.selected_index()), Some(1));
        app.apply_action(DashboardAction::SelectProject(5));
        assert_eq!(app.phase.selection().map(|s| s.selected_index()), Some(1));
    }
}
