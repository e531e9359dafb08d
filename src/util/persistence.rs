use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "EcoSpire";
const APP_NAME: &str = "EcoSpire";
const STATE_FILE: &str = "state.json";

/// Platform config directory shared by `state.json` and `config.json`.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

fn data_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(STATE_FILE))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    load_state_from(&data_file()?)
}

pub fn load_state_from(path: &Path) -> Option<PersistedState> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => {
            debug!(path = ?path, "Restored saved form");
            Some(state)
        }
        Err(err) => {
            warn!(path = ?path, error = %err, "Ignoring unreadable saved state");
            None
        }
    }
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_state_to(&path, state)
}

pub fn save_state_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
