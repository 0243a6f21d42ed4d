use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local demo run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding locally persisted state (default: `.sublynx`).
    pub data_dir: PathBuf,
    /// Session record file name inside `data_dir`
    /// (default: `session.json`).
    pub session_file: String,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default        |
    /// |------------------------|----------------|
    /// | `SUBLYNX_DATA_DIR`     | `.sublynx`     |
    /// | `SUBLYNX_SESSION_FILE` | `session.json` |
    pub fn from_env() -> Self {
        let data_dir = std::env::var("SUBLYNX_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".sublynx"));

        let session_file =
            std::env::var("SUBLYNX_SESSION_FILE").unwrap_or_else(|_| "session.json".into());

        Self {
            data_dir,
            session_file,
        }
    }

    /// Full path of the session record file.
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(&self.session_file)
    }
}
