//! Session file
//!
//! Keeps the login session as JSON in `<data_dir>/domain-tracker/session.json`.
//! Implements the core's `SessionStore` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain_tracker_core::{CoreError, CoreResult, Session, SessionStore};
use tokio::fs;
use tokio::sync::Mutex;

use super::config::data_dir;

const SESSION_FILE: &str = "session.json";

/// Session store backed by a JSON file
pub struct FileSessionStore {
    path: PathBuf,
    /// In-memory copy; `None` until the file has been read once
    cache: Mutex<Option<Option<Session>>>,
}

impl FileSessionStore {
    /// Store at the default location.
    pub fn new() -> Self {
        Self::at(data_dir().join(SESSION_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> CoreResult<Option<Session>> {
        if !fs::try_exists(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?
        {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A damaged file means logged out, not a crash loop on startup
                log::warn!("Ignoring unreadable session file {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> CoreResult<Option<Session>> {
        let mut cache = self.cache.lock().await;
        if let Some(session) = cache.as_ref() {
            return Ok(session.clone());
        }

        let session = self.read_file().await?;
        *cache = Some(session.clone());
        Ok(session)
    }

    async fn save(&self, session: &Session) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(session)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        *self.cache.lock().await = Some(Some(session.clone()));
        log::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(CoreError::StorageError(e.to_string())),
        }
        *self.cache.lock().await = Some(None);
        log::debug!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain_tracker_core::User;

    use super::*;

    fn session() -> Session {
        Session {
            token: "abc123".to_string(),
            user: Some(User {
                email: "admin@example.com".to_string(),
                ..User::default()
            }),
        }
    }

    #[tokio::test]
    async fn missing_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at(dir.path().join("session.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_from_a_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileSessionStore::at(&path).save(&session()).await.unwrap();
        assert!(path.exists());

        let reopened = FileSessionStore::at(&path);
        assert_eq!(reopened.load().await.unwrap(), Some(session()));
    }

    #[tokio::test]
    async fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at(dir.path().join("session.json"));
        store.save(&session()).await.unwrap();

        store.clear().await.unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().await.unwrap(), None);

        // Clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::at(&path);
        assert_eq!(store.load().await.unwrap(), None);
    }
}
