//! Runs the projects fetch off the UI thread.
//!
//! Every [`ProjectLoader::start`] gets its own channel. Replacing or dropping
//! the loader drops the receiver, so a late result from an abandoned load has
//! nowhere to go and is discarded.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::model::Project;

use super::source::{load_projects, DataSource, LoadError};

type LoadResult = Result<Vec<Project>, LoadError>;

#[derive(Debug, Default)]
pub struct ProjectLoader {
    rx: Option<Receiver<LoadResult>>,
}

impl ProjectLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `source` in the background. `on_done` runs on the worker
    /// after the result is sent, typically to request a repaint.
    pub fn start(
        &mut self,
        source: DataSource,
        timeout: Duration,
        on_done: impl FnOnce() + Send + 'static,
    ) -> Result<(), LoadError> {
        let (tx, rx) = mpsc::channel();
        // Drop any in-flight load before the new one begins.
        self.rx = None;
        log::info!("loading projects from {source}");
        thread::Builder::new()
            .name("project-loader".into())
            .spawn(move || {
                let result = load_projects(&source, timeout);
                if tx.send(result).is_err() {
                    log::debug!("discarding projects result for {source}; receiver gone");
                }
                on_done();
            })
            .map_err(LoadError::Spawn)?;
        self.rx = Some(rx);
        Ok(())
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Non-blocking check for the result. Yields it at most once per load.
    pub fn poll(&mut self) -> Option<LoadResult> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LoadError::Interrupted),
        };
        self.rx = None;
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn wait_for(loader: &mut ProjectLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = loader.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader never finished");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn delivers_result_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"{"projects":[{"id":"P1","name":"Depot","customer":"City","status":"Behind",
                "startDate":"2024-01-01","endDate":"2024-06-30",
                "contract":{"total":1,"invoiced":0,"paid":0,"remaining":1}}]}"#,
        )
        .unwrap();

        let (done_tx, done_rx) = mpsc::channel();
        let mut loader = ProjectLoader::new();
        loader
            .start(DataSource::File(path), Duration::from_secs(1), move || {
                let _ = done_tx.send(());
            })
            .unwrap();
        assert!(loader.is_pending());

        let projects = wait_for(&mut loader).unwrap();
        assert_eq!(projects[0].id, "P1");
        assert!(!loader.is_pending());
        assert!(loader.poll().is_none());
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn failures_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = ProjectLoader::new();
        loader
            .start(
                DataSource::File(dir.path().join("missing.json")),
                Duration::from_secs(1),
                || {},
            )
            .unwrap();
        assert!(matches!(wait_for(&mut loader), Err(LoadError::Io { .. })));
    }

    #[test]
    fn dropping_loader_discards_late_result() {
        let dir = tempfile::tempdir().unwrap();
        let (done_tx, done_rx) = mpsc::channel();
        let mut loader = ProjectLoader::new();
        loader
            .start(
                DataSource::File(dir.path().join("missing.json")),
                Duration::from_secs(1),
                move || {
                    let _ = done_tx.send(());
                },
            )
            .unwrap();
        drop(loader);
        // The worker still completes without panicking.
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn idle_loader_polls_nothing() {
        let mut loader = ProjectLoader::new();
        assert!(loader.poll().is_none());
        assert!(!loader.is_pending());
    }
}
