//! Marker derivation, Web-Mercator fitting and slippy-map tile layout for the
//! location map.

use egui::{Color32, Pos2, Rect};

use crate::format::format_date;
use crate::model::Location;
use crate::status::map_pin_color;

/// Smallest span (degrees) a fitted view may cover, so a single point or
/// stacked duplicates still yield a usable zoom.
pub const MIN_SPAN_DEG: f64 = 0.01;

const MAX_MERCATOR_LAT: f64 = 85.051_128_78;
/// Floor for a fitted box's extent in normalised Mercator units.
const MIN_MERCATOR_SPAN: f64 = 1e-9;

/// Edge length of a slippy-map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;
pub const MAX_TILE_ZOOM: u8 = 19;
/// Layouts needing more tiles than this are skipped.
const MAX_VISIBLE_TILES: f64 = 64.0;

/// Address of one tile in the standard `z/x/y` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Latitude/longitude box, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing every point, or `None` for no points.
    pub fn covering(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<GeoBounds>, p| {
            Some(match acc {
                None => GeoBounds {
                    south: p.lat,
                    west: p.lng,
                    north: p.lat,
                    east: p.lng,
                },
                Some(b) => GeoBounds {
                    south: b.south.min(p.lat),
                    west: b.west.min(p.lng),
                    north: b.north.max(p.lat),
                    east: b.east.max(p.lng),
                },
            })
        })
    }

    #[cfg(test)]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lng)
    }

    pub fn is_degenerate(&self) -> bool {
        self.north - self.south < MIN_SPAN_DEG || self.east - self.west < MIN_SPAN_DEG
    }

    /// Grow each axis symmetrically to at least `min_span` degrees.
    pub fn widened(self, min_span: f64) -> Self {
        let (south, north) = widen_axis(self.south, self.north, min_span);
        let (west, east) = widen_axis(self.west, self.east, min_span);
        GeoBounds {
            south,
            west,
            north,
            east,
        }
    }
}

fn widen_axis(lo: f64, hi: f64, min_span: f64) -> (f64, f64) {
    let span = hi - lo;
    if span >= min_span {
        return (lo, hi);
    }
    let pad = (min_span - span) / 2.0;
    (lo - pad, hi + pad)
}

/// Popup text for one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub name: String,
    pub address: String,
    pub status: String,
    pub completion: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: GeoPoint,
    pub color: Color32,
    pub popup: MarkerPopup,
}

/// One marker per location, in input order. Duplicate coordinates are kept.
pub fn markers(locations: &[Location]) -> Vec<Marker> {
    locations
        .iter()
        .map(|loc| Marker {
            position: GeoPoint {
                lat: loc.lat,
                lng: loc.lng,
            },
            color: map_pin_color(loc.status.label()),
            popup: MarkerPopup {
                name: loc.name.clone(),
                address: loc.address.clone(),
                status: loc.status.label().to_string(),
                completion: format!("{}%", loc.completion),
                last_updated: format_date(&loc.last_updated),
            },
        })
        .collect()
}

/// Normalised Web-Mercator coordinates, both axes in `0.0..=1.0`.
fn mercator(p: GeoPoint) -> (f64, f64) {
    let lat = p.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = (p.lng + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
    (x, y)
}

/// Maps geographic points into a screen rectangle so that a bounds box fills
/// it (minus padding) at a uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    center: (f64, f64),
    scale: f64,
    viewport: Rect,
}

impl MapProjection {
    pub fn fit(bounds: GeoBounds, viewport: Rect, padding: f32) -> Self {
        let bounds = bounds.widened(MIN_SPAN_DEG);
        let (x0, y0) = mercator(GeoPoint {
            lat: bounds.north,
            lng: bounds.west,
        });
        let (x1, y1) = mercator(GeoPoint {
            lat: bounds.south,
            lng: bounds.east,
        });
        let avail_w = f64::from((viewport.width() - 2.0 * padding).max(1.0));
        let avail_h = f64::from((viewport.height() - 2.0 * padding).max(1.0));
        let span_x = (x1 - x0).max(MIN_MERCATOR_SPAN);
        let span_y = (y1 - y0).max(MIN_MERCATOR_SPAN);
        let scale = (avail_w / span_x).min(avail_h / span_y);
        Self {
            center: ((x0 + x1) / 2.0, (y0 + y1) / 2.0),
            scale,
            viewport,
        }
    }

    pub fn project(&self, p: GeoPoint) -> Pos2 {
        let (x, y) = mercator(p);
        self.to_screen(x, y)
    }

    fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let c = self.viewport.center();
        Pos2::new(
            c.x + ((x - self.center.0) * self.scale) as f32,
            c.y + ((y - self.center.1) * self.scale) as f32,
        )
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Zoom level whose native tile resolution is closest to this scale.
    pub fn tile_zoom(&self) -> u8 {
        let level = (self.scale / TILE_SIZE).log2().round();
        if level.is_finite() {
            level.clamp(0.0, f64::from(MAX_TILE_ZOOM)) as u8
        } else {
            0
        }
    }

    /// Tiles at `zoom` that overlap the viewport, with their screen rects.
    /// Empty when the view lies off the world or would need too many tiles.
    pub fn visible_tiles(&self, zoom: u8) -> Vec<(TileId, Rect)> {
        let n = f64::from(1u32 << zoom.min(MAX_TILE_ZOOM));
        let half_w = f64::from(self.viewport.width()) / 2.0 / self.scale;
        let half_h = f64::from(self.viewport.height()) / 2.0 / self.scale;
        let first_x = ((self.center.0 - half_w) * n).floor().max(0.0);
        let last_x = ((self.center.0 + half_w) * n).ceil().min(n);
        let first_y = ((self.center.1 - half_h) * n).floor().max(0.0);
        let last_y = ((self.center.1 + half_h) * n).ceil().min(n);
        let spans = [first_x, last_x, first_y, last_y];
        if spans.iter().any(|v| !v.is_finite())
            || first_x >= last_x
            || first_y >= last_y
            || (last_x - first_x) * (last_y - first_y) > MAX_VISIBLE_TILES
        {
            return Vec::new();
        }

        let mut tiles = Vec::new();
        for ty in first_y as u32..last_y as u32 {
            for tx in first_x as u32..last_x as u32 {
                let (fx, fy) = (f64::from(tx), f64::from(ty));
                let rect = Rect::from_min_max(
                    self.to_screen(fx / n, fy / n),
                    self.to_screen((fx + 1.0) / n, (fy + 1.0) / n),
                );
                tiles.push((TileId { zoom, x: tx, y: ty }, rect));
            }
        }
        tiles
    }
}
