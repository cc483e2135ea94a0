use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current save-file schema version.
const SAVE_SCHEMA_VERSION: u32 = 1;

/// Errors from save-file operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("schema version mismatch: file has v{file_version}, expected v{expected_version}")]
    SchemaMismatch {
        file_version: u32,
        expected_version: u32,
    },
}

/// Persisted session state: progress and best records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub schema_version: u32,
    pub level: u32,
    pub coins: u32,
    /// Fewest moves in a completed solve, if any solve has happened.
    pub best_moves: Option<u32>,
    /// Fastest completed solve in whole seconds, if any.
    pub best_time_secs: Option<u32>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            schema_version: SAVE_SCHEMA_VERSION,
            level: 1,
            coins: 0,
            best_moves: None,
            best_time_secs: None,
        }
    }
}

/// File-backed session store holding one JSON document.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// A store at the given file path. Nothing is read or created yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the save file, or start fresh if it does not exist yet.
    pub fn load_or_default(&self) -> Result<SaveData, SessionError> {
        if !self.path.exists() {
            return Ok(SaveData::default());
        }
        let data: SaveData = serde_json::from_reader(std::fs::File::open(&self.path)?)?;
        if data.schema_version != SAVE_SCHEMA_VERSION {
            return Err(SessionError::SchemaMismatch {
                file_version: data.schema_version,
                expected_version: SAVE_SCHEMA_VERSION,
            });
        }
        Ok(data)
    }

    /// Write the save file, creating parent directories as needed.
    pub fn save(&self, data: &SaveData) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        serde_json::to_writer_pretty(std::fs::File::create(&self.path)?, data)?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("save.json"));
        let data = store.load_or_default().unwrap();
        assert_eq!(data, SaveData::default());
        assert_eq!(data.level, 1);
        assert_eq!(data.best_moves, None);
    }

    #[test]
    fn save_and_reload_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("nested").join("save.json"));

        let mut data = SaveData::default();
        data.coins = 230;
        data.level = 4;
        data.best_moves = Some(57);
        data.best_time_secs = Some(181);
        store.save(&data).unwrap();

        let reloaded = SessionStore::new(store.path()).load_or_default().unwrap();
        assert_eq!(reloaded, data);
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("save.json");
        let mut data = SaveData::default();
        data.schema_version = 99;
        std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let err = SessionStore::new(&path).load_or_default().unwrap_err();
        assert!(matches!(
            err,
            SessionError::SchemaMismatch {
                file_version: 99,
                ..
            }
        ));
    }

    #[test]
    fn corrupt_json_surfaces_as_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("save.json");
        std::fs::write(&path, "not json {").unwrap();
        assert!(matches!(
            SessionStore::new(&path).load_or_default(),
            Err(SessionError::Json(_))
        ));
    }
}
