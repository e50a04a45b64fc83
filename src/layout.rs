use std::path::{Path, PathBuf};

use crate::error::{Result, SweepError};

/// Concrete directories backing each cache region of one application.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub internal_cache: PathBuf,
    pub code_cache: PathBuf,
    /// Cache on removable/shared storage. Absent on hosts without one.
    pub external_cache: Option<PathBuf>,
    pub files_dir: PathBuf,
    pub no_backup_dir: PathBuf,
    pub databases_dir: PathBuf,
    pub prefs_dir: PathBuf,
}

impl AppLayout {
    /// Conventional layout under a single app data root.
    pub fn under(data_dir: &Path, external_cache: Option<PathBuf>) -> Self {
        Self {
            internal_cache: data_dir.join("cache"),
            code_cache: data_dir.join("code_cache"),
            external_cache,
            files_dir: data_dir.join("files"),
            no_backup_dir: data_dir.join("no_backup"),
            databases_dir: data_dir.join("databases"),
            prefs_dir: data_dir.join("shared_prefs"),
        }
    }

    /// Resolve the default per-app layout from the platform directories:
    /// data under the local data dir, external cache under the user cache dir.
    pub fn discover(app_id: &str) -> Result<Self> {
        let data_root = dirs::data_local_dir()
            .ok_or_else(|| SweepError::Layout("no local data directory on this platform".into()))?
            .join(app_id);
        let external = dirs::cache_dir().map(|d| d.join(app_id));
        Ok(Self::under(&data_root, external))
    }

    /// Root of the webview's on-disk state, next to the other app data.
    pub fn webview_dir(&self) -> PathBuf {
        self.files_dir
            .parent()
            .unwrap_or(&self.files_dir)
            .join("webview")
    }
}
