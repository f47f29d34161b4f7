pub mod activity;
pub mod location;
pub mod progress;
pub mod project;

pub use activity::{ActionItem, Rfi, Submittal};
pub use location::{Location, LocationStatus};
pub use progress::ProgressSample;
pub use project::{Contract, Project, ProjectStatus, ProjectsDocument};
