use crate::models::ScanReport;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("scan results file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read scan results from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse scan results in {}. First 200 chars: {snippet}", .path.display())]
    Parse {
        path: PathBuf,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}

/// Reads Trivy JSON output from disk
pub struct ScanLoader;

impl ScanLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<ScanReport, LoadError> {
        let path = path.as_ref();
        debug!("📄 Reading scan results from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::parse_json(&contents).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            snippet: contents.chars().take(200).collect(),
            source,
        })
    }

    pub fn parse_json(json_data: &str) -> Result<ScanReport, serde_json::Error> {
        serde_json::from_str(json_data).map(ScanReport::new)
    }
}
