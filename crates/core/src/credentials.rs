//! Access token storage.
//!
//! Telegraph accounts have no password; whoever holds the access token owns
//! the account. [`TokenStore`] keeps that token in a single file, by default
//! `~/.config/telegraph/access_token`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Result, TelegraphError};

const TOKEN_FILE: &str = "access_token";

/// File-backed storage for one access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the user's config directory.
    ///
    /// # Errors
    ///
    /// Returns [`TelegraphError::ConfigError`] if no home directory is known.
    pub fn default_location() -> Result<Self> {
        let dir = Self::default_dir()
            .ok_or_else(|| TelegraphError::ConfigError("could not determine home directory".to_string()))?;
        Ok(Self::new(dir.join(TOKEN_FILE)))
    }

    /// Get default config directory (~/.config/telegraph)
    fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("telegraph"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored token, `None` if nothing has been saved.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let token = fs::read_to_string(&self.path)?.trim().to_string();
        if token.is_empty() {
            return Err(TelegraphError::ConfigError(format!(
                "token file {} is empty",
                self.path.display()
            )));
        }

        Ok(Some(token))
    }

    /// Writes the token, creating parent directories as needed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            // mode only applies to newly created files
            if self.path.exists() {
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
            }
        }

        let mut file = options.open(&self.path)?;
        writeln!(file, "{}", token)?;

        tracing::debug!(path = %self.path.display(), "saved access token");
        Ok(())
    }

    /// Deletes the stored token if there is one.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
