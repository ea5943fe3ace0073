//! Path resolution for config, session, and log files
//!
//! Everything lives under the user's home directory with a /tmp fallback.

use std::path::PathBuf;

/// Data directory relative to home (logs, session)
const DATA_SUBDIR: &str = ".local/share/checkmate";

/// Config directory relative to home
const CONFIG_SUBDIR: &str = ".config/checkmate";

pub const LOG_FILE: &str = "checkmate.log";
const CONFIG_FILE: &str = "config.toml";
const SESSION_FILE: &str = "session.json";

/// Fallback data directory when home is unavailable
const FALLBACK_DATA_DIR: &str = "/tmp/checkmate";

pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DATA_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(CONFIG_SUBDIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR).join(CONFIG_FILE))
}

pub fn session_path() -> PathBuf {
    data_dir().join(SESSION_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_namespaced() {
        assert!(data_dir().to_string_lossy().contains("checkmate"));
        assert!(config_file_path().ends_with("config.toml"));
        assert!(session_path().starts_with(data_dir()));
    }
}
