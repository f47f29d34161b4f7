pub mod loader;
pub mod source;
pub mod tiles;

pub use loader::ProjectLoader;
pub use source::{DataSource, LoadError};
pub use tiles::{TileFetcher, TileSource};
