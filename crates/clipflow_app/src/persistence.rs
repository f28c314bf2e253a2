use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use client_logging::{client_error, client_info, client_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

const SESSION_FILENAME: &str = ".clipflow_session.ron";

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    project_id: Option<String>,
}

/// Session files live in the OS temp dir, matching the session-scoped
/// lifetime of the browser fallback they replace.
pub fn default_session_path() -> PathBuf {
    std::env::temp_dir().join(SESSION_FILENAME)
}

pub fn load_session_project_id(path: &Path) -> Option<String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            client_warn!("Failed to read session file {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str::<PersistedSession>(&content) {
        Ok(session) => {
            client_info!("Loaded session fallback from {:?}", path);
            session.project_id
        }
        Err(err) => {
            client_warn!("Failed to parse session file {:?}: {}", path, err);
            None
        }
    }
}

pub fn save_session_project_id(path: &Path, project_id: &str) {
    if let Err(err) = write_session(path, project_id) {
        client_error!("Failed to write session file {:?}: {}", path, err);
    }
}

fn write_session(path: &Path, project_id: &str) -> Result<(), SessionStoreError> {
    let session = PersistedSession {
        project_id: Some(project_id.to_string()),
    };
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(&session, pretty)
        .map_err(|err| SessionStoreError::Serialize(err.to_string()))?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;

    // Replace existing file if present to keep determinism.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path)
        .map_err(|err| SessionStoreError::Io(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_project_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SESSION_FILENAME);

        assert_eq!(load_session_project_id(&path), None);
        save_session_project_id(&path, "42");
        assert_eq!(load_session_project_id(&path), Some("42".to_string()));

        // Saving again replaces the previous value.
        save_session_project_id(&path, "7");
        assert_eq!(load_session_project_id(&path), Some("7".to_string()));
    }

    #[test]
    fn corrupt_session_files_degrade_to_no_fallback() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SESSION_FILENAME);
        fs::write(&path, "not ron at all {{{{").expect("write");

        assert_eq!(load_session_project_id(&path), None);
    }
}
