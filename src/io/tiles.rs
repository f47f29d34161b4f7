//! Background fetching of slippy-map tiles for the location map.
//!
//! A [`TileFetcher`] owns one worker thread. Requests are served in order;
//! dropping the fetcher closes both channels and the worker exits after its
//! current download.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use egui::ColorImage;

use crate::view::map::TileId;

/// Default basemap: the public OpenStreetMap tile server.
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

const USER_AGENT: &str = concat!("customer-portal/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum TileError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not decode tile: {0}")]
    Decode(#[from] image::ImageError),
}

pub type TileResult = (TileId, Result<ColorImage, TileError>);

/// A `{z}/{x}/{y}` URL template plus the per-request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    url_template: String,
    timeout: Duration,
}

impl TileSource {
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url_template: url_template.into(),
            timeout,
        }
    }

    pub fn url(&self, id: TileId) -> String {
        self.url_template
            .replace("{z}", &id.zoom.to_string())
            .replace("{x}", &id.x.to_string())
            .replace("{y}", &id.y.to_string())
    }
}

/// Decode PNG or JPEG bytes into an egui image.
pub fn decode_tile(bytes: &[u8]) -> Result<ColorImage, TileError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn fetch_tile(client: &reqwest::blocking::Client, url: &str) -> Result<ColorImage, TileError> {
    let request_error = |source| TileError::Request {
        url: url.to_string(),
        source,
    };
    let response = client.get(url).send().map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(TileError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().map_err(request_error)?;
    decode_tile(&body)
}

pub struct TileFetcher {
    requests: Sender<TileId>,
    results: Receiver<TileResult>,
}

impl TileFetcher {
    /// Start the worker. `on_tile` runs after each result is sent, typically
    /// to request a repaint.
    pub fn spawn(
        source: TileSource,
        on_tile: impl Fn() + Send + 'static,
    ) -> std::io::Result<Self> {
        let (requests, pending) = mpsc::channel::<TileId>();
        let (done, results) = mpsc::channel();
        thread::Builder::new()
            .name("map-tiles".into())
            .spawn(move || {
                let client = match reqwest::blocking::Client::builder()
                    .user_agent(USER_AGENT)
                    .timeout(source.timeout)
                    .build()
                {
                    Ok(client) => client,
                    Err(err) => {
                        log::warn!("map tiles disabled: {err}");
                        return;
                    }
                };
                for id in pending {
                    let url = source.url(id);
                    let result = fetch_tile(&client, &url);
                    if let Err(err) = &result {
                        log::debug!("tile {url} unavailable: {err}");
                    }
                    if done.send((id, result)).is_err() {
                        break;
                    }
                    on_tile();
                }
                log::debug!("map tile worker stopped");
            })?;
        Ok(Self { requests, results })
    }

    /// Queue a tile. Returns `false` once the worker has stopped.
    pub fn request(&self, id: TileId) -> bool {
        self.requests.send(id).is_ok()
    }

    /// Next finished tile, if any. Never blocks.
    pub fn poll(&self) -> Option<TileResult> {
        self.results.try_recv().ok()
    }
}
