//! Location map: OpenStreetMap tiles under painted pins, popups and a legend.
//!
//! The [`MapSurface`] is the per-project map state (markers, fitted bounds,
//! open popup, tile textures). [`LocationMap`] owns at most one and swaps it
//! when the active project or its locations change.

use std::collections::HashMap;

use egui::{
    Align2, Color32, Pos2, Rect, RichText, Sense, Shape, Stroke, TextureHandle, TextureOptions, Ui,
    Vec2,
};
use egui_phosphor::regular as icons;

use crate::io::{TileFetcher, TileSource};
use crate::status::{PIN_COMPLETE, PIN_IN_PROGRESS, PIN_NOT_STARTED};
use crate::ui::progress_chart::legend_entry;
use crate::ui::{theme, widgets};
use crate::view::map::{GeoBounds, GeoPoint, MapProjection, Marker, TileId, MIN_SPAN_DEG};

const MAP_HEIGHT: f32 = 400.0;
const FIT_PADDING: f32 = 50.0;
const PIN_RADIUS: f32 = 12.0;
/// Distance from the coordinate (pin tip) to the center of the pin head.
const PIN_LIFT: f32 = 24.0;
const ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors";

enum TileSlot {
    Pending,
    Ready(TextureHandle),
    Failed,
}

/// Basemap tiles for one surface. The worker starts on the first paint that
/// needs a tile and stops when the layer is dropped.
struct TileLayer {
    source: Option<TileSource>,
    fetcher: Option<TileFetcher>,
    tiles: HashMap<TileId, TileSlot>,
}

impl TileLayer {
    fn new(source: TileSource) -> Self {
        Self {
            source: Some(source),
            fetcher: None,
            tiles: HashMap::new(),
        }
    }

    fn receive(&mut self, ctx: &egui::Context) {
        let Some(fetcher) = &self.fetcher else {
            return;
        };
        while let Some((id, result)) = fetcher.poll() {
            let slot = match result {
                Ok(image) => TileSlot::Ready(ctx.load_texture(
                    format!("map-tile-{}-{}-{}", id.zoom, id.x, id.y),
                    image,
                    TextureOptions::LINEAR,
                )),
                Err(_) => TileSlot::Failed,
            };
            self.tiles.insert(id, slot);
        }
    }

    fn request(&mut self, ctx: &egui::Context, id: TileId) {
        if self.fetcher.is_none() {
            let Some(source) = self.source.take() else {
                return;
            };
            let repaint = ctx.clone();
            match TileFetcher::spawn(source, move || repaint.request_repaint()) {
                Ok(fetcher) => self.fetcher = Some(fetcher),
                Err(err) => {
                    log::warn!("could not start map tile worker: {err}");
                    return;
                }
            }
        }
        let queued = self.fetcher.as_ref().is_some_and(|f| f.request(id));
        let slot = if queued { TileSlot::Pending } else { TileSlot::Failed };
        self.tiles.insert(id, slot);
    }

    fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, projection: &MapProjection) {
        self.receive(ctx);
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        for (id, rect) in projection.visible_tiles(projection.tile_zoom()) {
            match self.tiles.get(&id) {
                Some(TileSlot::Ready(texture)) => {
                    painter.image(texture.id(), rect, uv, Color32::WHITE);
                }
                Some(TileSlot::Pending | TileSlot::Failed) => {}
                None => self.request(ctx, id),
            }
        }
    }
}

/// Map state for one project's location set.
pub struct MapSurface {
    project_id: String,
    markers: Vec<Marker>,
    bounds: Option<GeoBounds>,
    open_popup: Option<usize>,
    tiles: Option<TileLayer>,
}

impl MapSurface {
    fn build(project_id: &str, markers: &[Marker], tiles: Option<TileSource>) -> Self {
        let bounds = GeoBounds::covering(markers.iter().map(|m| m.position));
        if bounds.is_some_and(|b| b.is_degenerate()) {
            log::debug!("project {project_id} locations span less than {MIN_SPAN_DEG} degrees; widening");
        }
        Self {
            project_id: project_id.to_string(),
            markers: markers.to_vec(),
            bounds,
            open_popup: None,
            tiles: tiles.map(TileLayer::new),
        }
    }

    fn matches(&self, project_id: &str, markers: &[Marker]) -> bool {
        self.project_id == project_id && self.markers == markers
    }
}

impl Drop for MapSurface {
    fn drop(&mut self) {
        log::debug!("released map surface for project {}", self.project_id);
    }
}

#[derive(Default)]
pub struct LocationMap {
    surface: Option<MapSurface>,
    builds: usize,
    tile_source: Option<TileSource>,
}

impl LocationMap {
    /// A map without a tile basemap.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map drawing tiles from `source` under the pins when one is given.
    pub fn with_tiles(source: Option<TileSource>) -> Self {
        Self {
            tile_source: source,
            ..Self::default()
        }
    }

    /// Make the surface reflect `markers`, rebuilding it when the project or
    /// its location set changed. The old surface is dropped before the new
    /// one is built.
    pub fn sync(&mut self, project_id: &str, markers: &[Marker]) -> &mut MapSurface {
        let stale = self
            .surface
            .as_ref()
            .map_or(true, |s| !s.matches(project_id, markers));
        if stale {
            self.surface = None;
            self.builds += 1;
            log::debug!(
                "building map surface #{} for project {project_id} with {} markers",
                self.builds,
                markers.len()
            );
        }
        let tiles = self.tile_source.clone();
        self.surface
            .get_or_insert_with(|| MapSurface::build(project_id, markers, tiles))
    }

    /// Drop the surface, e.g. when the dashboard is no longer shown.
    pub fn release(&mut self) {
        self.surface = None;
    }

    pub fn show(&mut self, ui: &mut Ui, project_id: &str, markers: &[Marker]) {
        let surface = self.sync(project_id, markers);
        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            widgets::section_heading(ui, "Project Locations", Some("Interactive Map"));
            paint_surface(ui, surface);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                legend_entry(ui, PIN_COMPLETE, "Complete");
                legend_entry(ui, PIN_IN_PROGRESS, "In Progress");
                legend_entry(ui, PIN_NOT_STARTED, "Not Started");
            });
        });
    }
}

/// OpenStreetMap link centered on a point.
pub fn osm_url(p: GeoPoint) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=16/{lat}/{lng}",
        lat = p.lat,
        lng = p.lng
    )
}

fn pin_head(tip: Pos2) -> Pos2 {
    tip - Vec2::new(0.0, PIN_LIFT)
}

fn paint_surface(ui: &mut Ui, surface: &mut MapSurface) {
    let p = theme::palette(ui.ctx());
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width(), MAP_HEIGHT), Sense::click());
    let rect = response.rect;
    let painter = painter.with_clip_rect(rect);
    painter.rect_filled(rect, theme::CARD_ROUNDING, p.map_water);

    let Some(bounds) = surface.bounds else {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            crate::view::tables::NO_LOCATIONS,
            theme::font_body(),
            p.text_dim,
        );
        painter.rect_stroke(rect, theme::CARD_ROUNDING, Stroke::new(1.0, p.border));
        return;
    };

    let projection = MapProjection::fit(bounds, rect, FIT_PADDING);
    if let Some(tiles) = surface.tiles.as_mut() {
        tiles.paint(ui.ctx(), &painter, &projection);
        paint_attribution(&painter, rect);
    }

    let tips: Vec<Pos2> = surface
        .markers
        .iter()
        .map(|m| projection.project(m.position))
        .collect();
    for (marker, &tip) in surface.markers.iter().zip(&tips) {
        paint_pin(&painter, tip, marker.color);
    }
    painter.rect_stroke(rect, theme::CARD_ROUNDING, Stroke::new(1.0, p.border));

    // Later pins are drawn on top, so hit-test from the end.
    let hit = |pos: Pos2| {
        tips.iter()
            .rposition(|&tip| pin_head(tip).distance(pos) <= PIN_RADIUS + 2.0 || tip.distance(pos) < 6.0)
    };

    if let Some(index) = response.hover_pos().and_then(hit) {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        if surface.open_popup != Some(index) {
            let marker = &surface.markers[index];
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                egui::Id::new(("map-pin-tip", index)),
                |ui| {
                    ui.strong(&marker.popup.name);
                },
            );
        }
    }
    if response.clicked() {
        surface.open_popup = response.interact_pointer_pos().and_then(hit);
    }

    if let Some(index) = surface.open_popup {
        // Markers can shrink between frames only via a rebuild, which resets this.
        if let (Some(marker), Some(&tip)) = (surface.markers.get(index), tips.get(index)) {
            let anchor = pin_head(tip) - Vec2::new(0.0, PIN_RADIUS + 6.0);
            if rect.contains(anchor) {
                let close = show_popup(ui, surface.project_id.as_str(), index, marker, anchor);
                if close {
                    surface.open_popup = None;
                }
            }
        }
    }
}

fn paint_pin(painter: &egui::Painter, tip: Pos2, color: Color32) {
    let head = pin_head(tip);
    painter.circle_filled(tip + Vec2::new(0.0, 1.0), 3.0, Color32::from_black_alpha(60));
    painter.add(Shape::convex_polygon(
        vec![
            Pos2::new(head.x - 6.0, head.y + PIN_RADIUS - 2.0),
            Pos2::new(head.x + 6.0, head.y + PIN_RADIUS - 2.0),
            tip,
        ],
        color,
        Stroke::NONE,
    ));
    painter.circle(head, PIN_RADIUS, color, Stroke::new(3.0, Color32::WHITE));
}

fn paint_attribution(painter: &egui::Painter, rect: Rect) {
    let anchor = rect.right_bottom() - Vec2::new(4.0, 4.0);
    let galley = painter.layout_no_wrap(
        ATTRIBUTION.to_string(),
        egui::FontId::proportional(10.0),
        Color32::from_gray(60),
    );
    let text_rect = Align2::RIGHT_BOTTOM.anchor_size(anchor, galley.size());
    painter.rect_filled(text_rect.expand(2.0), 2.0, Color32::from_white_alpha(200));
    painter.galley(text_rect.min, galley, Color32::from_gray(60));
}

/// Draws the popup for one marker. Returns `true` when it should close.
fn show_popup(ui: &Ui, project_id: &str, index: usize, marker: &Marker, anchor: Pos2) -> bool {
    let mut close = false;
    egui::Area::new(egui::Id::new(("map-popup", project_id, index)))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor)
        .pivot(Align2::CENTER_BOTTOM)
        .show(ui.ctx(), |ui| {
            let p = theme::palette(ui.ctx());
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(200.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&marker.popup.name).strong().color(p.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(egui::Button::new(icons::X).frame(false)).clicked() {
                            close = true;
                        }
                    });
                });
                ui.label(
                    RichText::new(&marker.popup.address)
                        .font(theme::font_small())
                        .color(p.text_dim),
                );
                ui.label(RichText::new(format!("Status: {}", marker.popup.status)).font(theme::font_small()));
                ui.label(
                    RichText::new(format!("Completion: {}", marker.popup.completion))
                        .font(theme::font_small()),
                );
                ui.label(
                    RichText::new(format!("Last updated: {}", marker.popup.last_updated))
                        .font(theme::font_small())
                        .color(p.text_dim),
                );
                ui.add_space(4.0);
                let open_label = format!("{} Open in OpenStreetMap", icons::ARROW_SQUARE_OUT);
                if ui.button(open_label).clicked() {
                    let url = osm_url(marker.position);
                    if let Err(err) = open::that(&url) {
                        log::warn!("could not open {url}: {err}");
                    }
                }
            });
        });
    close
}

#[cfg(test)]
impl MapSurface {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    /// `None` without a basemap, otherwise whether its worker is running.
    pub fn tile_worker_started(&self) -> Option<bool> {
        self.tiles.as_ref().map(|t| t.fetcher.is_some())
    }

    pub fn ready_tiles(&self) -> usize {
        self.tiles.as_ref().map_or(0, |t| {
            t.tiles
                .values()
                .filter(|slot| matches!(slot, TileSlot::Ready(_)))
                .count()
        })
    }
}

#[cfg(test)]
impl LocationMap {
    pub fn surface(&self) -> Option<&MapSurface> {
        self.surface.as_ref()
    }

    /// Number of surfaces built so far.
    pub fn builds(&self) -> usize {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::fixtures;
    use crate::model::LocationStatus;
    use crate::view::map::markers;
    use std::time::{Duration, Instant};

    #[test]
    fn builds_once_per_location_set() {
        let project = fixtures::project("A");
        let pins = markers(&project.locations);
        let mut map = LocationMap::new();

        map.sync("A", &pins);
        map.sync("A", &pins);
        assert_eq!(map.builds(), 1);
        assert_eq!(map.surface().map(|s| s.markers().len()), Some(2));

        map.sync("B", &pins);
        assert_eq!(map.builds(), 2);
        assert_eq!(map.surface().map(MapSurface::project_id), Some("B"));

        let mut moved = project.locations.clone();
        moved[0].lat += 1.0;
        map.sync("B", &markers(&moved));
        assert_eq!(map.builds(), 3);
    }

    #[test]
    fn bounds_cover_every_marker() {
        let locations = vec![
            fixtures::location("L1", 37.7, -122.5, LocationStatus::Complete),
            fixtures::location("L2", 34.0, -118.2, LocationStatus::NotStarted),
            fixtures::location("L3", 47.6, -122.3, LocationStatus::InProgress),
        ];
        let pins = markers(&locations);
        let mut map = LocationMap::new();
        let bounds = map.sync("P", &pins).bounds().unwrap();
        for pin in &pins {
            assert!(bounds.contains(pin.position));
        }
    }

    #[test]
    fn duplicate_coordinates_keep_both_markers() {
        let locations = vec![
            fixtures::location("L1", 40.0, -74.0, LocationStatus::Complete),
            fixtures::location("L2", 40.0, -74.0, LocationStatus::InProgress),
        ];
        let mut map = LocationMap::new();
        let surface = map.sync("P", &markers(&locations));
        assert_eq!(surface.markers().len(), 2);
        assert!(surface.bounds().unwrap().is_degenerate());
    }

    #[test]
    fn release_drops_surface() {
        let mut map = LocationMap::new();
        map.sync("P", &[]);
        assert!(map.surface().is_some());
        assert!(map.surface().unwrap().bounds().is_none());
        map.release();
        assert!(map.surface().is_none());
        map.sync("P", &[]);
        assert_eq!(map.builds(), 2);
    }

    #[test]
    fn tile_worker_waits_for_first_paint() {
        let pins = markers(&fixtures::project("P").locations);
        assert_eq!(LocationMap::new().sync("P", &pins).tile_worker_started(), None);

        let source = TileSource::new("http://127.0.0.1:9/{z}/{x}/{y}.png", Duration::from_secs(1));
        let mut map = LocationMap::with_tiles(Some(source));
        assert_eq!(map.sync("P", &pins).tile_worker_started(), Some(false));
    }

    #[test]
    fn painted_map_loads_tiles_under_the_pins() {
        let url = crate::io::tiles::stub::serve(64, "200 OK", crate::io::tiles::stub::png_bytes());
        let mut map = LocationMap::with_tiles(Some(TileSource::new(url, Duration::from_secs(5))));
        let pins = markers(&fixtures::project("P").locations);

        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            ..Default::default()
        };
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let _ = ctx.run(input.clone(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| map.show(ui, "P", &pins));
            });
            let surface = map.surface().unwrap();
            if surface.ready_tiles() > 0 {
                assert_eq!(surface.tile_worker_started(), Some(true));
                break;
            }
            assert!(Instant::now() < deadline, "no tile arrived");
            std::thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(map.builds(), 1);

        map.release();
        assert!(map.surface().is_none());
    }

    #[test]
    fn osm_link_points_at_marker() {
        let url = osm_url(GeoPoint {
            lat: 37.5,
            lng: -122.25,
        });
        assert_eq!(
            url,
            "https://www.openstreetmap.org/?mlat=37.5&mlon=-122.25#map=16/37.5/-122.25"
        );
    }
}
