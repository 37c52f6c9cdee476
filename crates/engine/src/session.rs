use std::{
    fs,
    path::{Path, PathBuf},
};

use api_types::outing::OutingId;
use serde::{Deserialize, Serialize};

use crate::ResultEngine;

/// Who is using the client and which outing they are in.
///
/// Identity is the person's name, the key the server uses for expenses and
/// settlement transfers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user_name: Option<String>,
    outing_id: Option<OutingId>,
}

impl Session {
    pub fn new(user_name: Option<String>, outing_id: Option<OutingId>) -> Self {
        Self {
            user_name: user_name.and_then(non_blank),
            outing_id,
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn outing_id(&self) -> Option<&OutingId> {
        self.outing_id.as_ref()
    }

    pub fn set_user_name(&mut self, name: &str) {
        self.user_name = non_blank(name.to_string());
    }

    /// Records a successful join or create.
    pub fn enter_outing(&mut self, user_name: &str, outing_id: OutingId) {
        self.set_user_name(user_name);
        self.outing_id = Some(outing_id);
    }

    /// Leaves the current outing but remembers the name for the next join.
    pub fn exit_outing(&mut self) {
        self.outing_id = None;
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// On-disk shape; the outing code is validated on load.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    user_name: Option<String>,
    outing_id: Option<String>,
}

/// Persists a [`Session`] as a small JSON file.
///
/// The file is a cache, never a source of truth: anything unreadable is
/// dropped and the client starts from the join screen.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Session {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Session::default(),
            Err(err) => {
                tracing::warn!("ignoring unreadable session file {}: {err}", self.path.display());
                return Session::default();
            }
        };

        let stored: StoredSession = match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!("ignoring malformed session file {}: {err}", self.path.display());
                return Session::default();
            }
        };

        let outing_id = stored.outing_id.and_then(|raw| match OutingId::parse(&raw) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!("dropping stored outing: {err}");
                None
            }
        });

        Session::new(stored.user_name, outing_id)
    }

    pub fn save(&self, session: &Session) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            user_name: session.user_name.clone(),
            outing_id: session.outing_id.as_ref().map(|id| id.as_str().to_string()),
        };
        let payload = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    /// Removes the file; a missing file is fine.
    pub fn clear(&self) -> ResultEngine<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
