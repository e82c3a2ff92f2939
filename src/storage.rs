//! Snapshot persistence: one JSON file, loaded at startup, saved at shutdown.

use crate::models::MatchState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk envelope around the match state.
///
/// There is no version tag: a snapshot with missing fields restores with
/// those fields defaulted, and unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    pub state: MatchState,
}

/// Read a snapshot. Returns `None` when the file is missing or unreadable;
/// a present-but-unparsable file is logged and treated the same way.
pub fn load(path: &Path) -> Option<MatchState> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("could not read snapshot {}: {}", path.display(), err);
            }
            return None;
        }
    };
    match serde_json::from_str::<Snapshot>(&raw) {
        Ok(snapshot) => Some(snapshot.state),
        Err(err) => {
            log::warn!(
                "snapshot {} is not valid, starting fresh: {}",
                path.display(),
                err
            );
            None
        }
    }
}

/// Restore-or-fresh entry point used at startup.
pub fn load_or_default(path: &Path) -> MatchState {
    match load(path) {
        Some(state) => {
            log::info!("restored match {} from {}", state.id, path.display());
            state
        }
        None => MatchState::new(),
    }
}

/// Write the snapshot. Best effort, no retry.
pub fn save(path: &Path, state: &MatchState) -> std::io::Result<()> {
    let snapshot = Snapshot {
        saved_at: Some(Utc::now()),
        state: state.clone(),
    };
    let raw = serde_json::to_string(&snapshot)?;
    fs::write(path, raw)
}

/// Remove the snapshot file, if any. Used by reset.
pub fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::info!("discarded snapshot {}", path.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => log::warn!("could not discard snapshot {}: {}", path.display(), err),
    }
}
