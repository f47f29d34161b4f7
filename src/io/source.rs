use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::model::{Project, ProjectsDocument};

/// Message shown for any failure to obtain or read the document.
pub const FAILED_TO_LOAD: &str = "Failed to load projects";
/// Message shown when the document loads but lists no projects.
pub const NO_PROJECTS: &str = "No projects available";

/// Errors from loading the projects document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
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
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid projects document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("projects document contains no projects")]
    NoProjects,
    #[error("failed to start loader thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("loader stopped before reporting a result")]
    Interrupted,
}

impl LoadError {
    /// Text for the error screen. Details stay in the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::NoProjects => NO_PROJECTS,
            _ => FAILED_TO_LOAD,
        }
    }
}

/// Where the projects document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Http(raw.to_string())
        } else {
            DataSource::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch and parse the projects document. Blocks; run it off the UI thread.
pub fn load_projects(source: &DataSource, timeout: Duration) -> Result<Vec<Project>, LoadError> {
    let bytes = match source {
        DataSource::Http(url) => fetch_http(url, timeout)?,
        DataSource::File(path) => std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?,
    };
    parse_projects(&bytes)
}

/// Parse a projects document, rejecting one with no projects.
pub fn parse_projects(bytes: &[u8]) -> Result<Vec<Project>, LoadError> {
    let doc: ProjectsDocument = serde_json::from_slice(bytes)?;
    if doc.projects.is_empty() {
        return Err(LoadError::NoProjects);
    }
    Ok(doc.projects)
}

fn fetch_http(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
    let request_error = |source| LoadError::Request {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(request_error)?;
    let response = client.get(url).send().map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().map_err(request_error)?;
    log::debug!("fetched {} bytes from {url}", body.len());
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    const ONE_PROJECT: &str = r#"{"projects":[{
        "id":"P1","name":"Depot","customer":"City","status":"On Track",
        "startDate":"2024-01-01","endDate":"2024-06-30",
        "contract":{"total":1000,"invoiced":500,"paid":250,"remaining":500}
    }]}"#;

    /// Serve exactly one HTTP response on a loopback port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/data/projects.json")
    }

    #[test]
    fn classifies_sources() {
        assert_eq!(
            DataSource::parse("https://example.com/projects.json"),
            DataSource::Http("https://example.com/projects.json".into())
        );
        assert_eq!(
            DataSource::parse(" HTTP://host/p.json "),
            DataSource::Http("HTTP://host/p.json".into())
        );
        assert_eq!(
            DataSource::parse("data/projects.json"),
            DataSource::File(PathBuf::from("data/projects.json"))
        );
    }

    #[test]
    fn reads_projects_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, ONE_PROJECT).unwrap();

        let projects = load_projects(&DataSource::File(path), Duration::from_secs(1)).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Depot");
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_projects(
            &DataSource::File(dir.path().join("absent.json")),
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.user_message(), FAILED_TO_LOAD);
    }

    #[test]
    fn empty_and_malformed_documents() {
        let err = parse_projects(br#"{"projects": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::NoProjects));
        assert_eq!(err.user_message(), NO_PROJECTS);

        let err = parse_projects(b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert_eq!(err.user_message(), FAILED_TO_LOAD);
    }

    #[test]
    fn free_text_statuses_still_load() {
        let doc = br#"{"projects":[{
            "id":"P1","name":"Depot","customer":"City","status":"on track",
            "startDate":"2024-01-01","endDate":"2024-06-30",
            "contract":{"total":1000,"invoiced":500,"paid":250,"remaining":500},
            "locations":[{"id":"L1","name":"Yard","address":"1 Dock Rd","lat":40.0,"lng":-74.0,
                "status":"Behind","completion":30,"lastUpdated":"2024-03-01"}],
            "rfis":[{"number":"RFI-1","subject":"Drainage","daysOpen":4.5,
                "assignedTo":"Engineer","status":"Open","category":"Civil"}]
        }]}"#;
        let projects = parse_projects(doc).unwrap();
        let project = &projects[0];

        let view = crate::view::DashboardView::derive(project, crate::state::ActivityTab::Rfis);
        assert_eq!(view.summary.status.tone, crate::status::StatusTone::Positive);
        assert_eq!(view.markers[0].color, crate::status::PIN_DEFAULT);
        assert_eq!(view.markers[0].popup.status, "Behind");
        assert_eq!(
            view.locations.rows()[0].status.tone,
            crate::status::StatusTone::Critical
        );
        match &view.activity {
            crate::view::ActivityView::Rfis(rfis) => {
                assert_eq!(rfis.rows()[0].days_open.text, "4.5 days");
                assert_eq!(rfis.rows()[0].days_open.tone, crate::status::StatusTone::Caution);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn bundled_sample_parses() {
        let projects = parse_projects(include_bytes!("../../data/projects.json")).unwrap();
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| !p.locations.is_empty()));
    }

    #[test]
    fn http_error_status_is_a_load_failure() {
        let url = serve_once("500 Internal Server Error", "oops");
        let err = load_projects(&DataSource::Http(url), Duration::from_secs(5)).unwrap_err();
        match &err {
            LoadError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(err.user_message(), FAILED_TO_LOAD);
    }

    #[test]
    fn http_success_is_parsed() {
        let url = serve_once("200 OK", ONE_PROJECT);
        let projects = load_projects(&DataSource::Http(url), Duration::from_secs(5)).unwrap();
        assert_eq!(projects[0].id, "P1");
    }
}
