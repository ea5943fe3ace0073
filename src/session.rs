//! Saved login session
//!
//! `checkmate login` stores the access token here so later commands can
//! call authorized endpoints without asking again.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::paths::session_path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
            signed_in_at: Utc::now(),
        }
    }

    /// Load the saved session, `None` if nobody is signed in
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&session_path())
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&session_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let mut file = open_private(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Forget the saved session; returns whether one existed
    pub fn clear() -> Result<bool> {
        Self::clear_at(&session_path())
    }

    pub fn clear_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }
}

/// Open for writing, readable by the owner only
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation; tighten a file left by an older version
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::File::create(path)
}

/// Pick the access token: explicit flag, then config, then saved session
pub fn resolve_token(
    flag: Option<String>,
    configured: Option<String>,
    session: Option<&Session>,
) -> Option<String> {
    flag.filter(|t| !t.is_empty())
        .or_else(|| configured.filter(|t| !t.is_empty()))
        .or_else(|| session.map(|s| s.token.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        assert_eq!(Session::load_from(&path).unwrap(), None);

        let session = Session::new("a@b.com", "tok");
        session.save_to(&path).unwrap();
        assert_eq!(Session::load_from(&path).unwrap(), Some(session));
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        // A pre-existing world-readable file gets tightened too
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        Session::new("a@b.com", "tok").save_to(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "session file mode is {:o}", mode & 0o777);
        assert_eq!(
            Session::load_from(&path).unwrap().map(|s| s.token),
            Some("tok".to_string())
        );
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert!(!Session::clear_at(&path).unwrap());
        Session::new("a@b.com", "tok").save_to(&path).unwrap();
        assert!(Session::clear_at(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Session::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_token_precedence() {
        let session = Session::new("a@b.com", "from-session");
        assert_eq!(
            resolve_token(Some("flag".into()), Some("cfg".into()), Some(&session)).as_deref(),
            Some("flag")
        );
        assert_eq!(
            resolve_token(None, Some("cfg".into()), Some(&session)).as_deref(),
            Some("cfg")
        );
        assert_eq!(
            resolve_token(Some(String::new()), None, Some(&session)).as_deref(),
            Some("from-session")
        );
        assert_eq!(resolve_token(None, None, None), None);
    }
}
