use std::path::PathBuf;

use crate::walker;

/// Interface to the host's embedded web view state.
///
/// Implementations are probed once at startup: a backend without a view
/// degrades the webview region to the storage-only path instead of failing
/// per call.
pub trait WebViewBackend: Send + Sync {
    /// Whether a live view is attached at all.
    fn has_view(&self) -> bool;

    /// Clear the view's cache, navigation history and autofill form data.
    fn clear_view(&self) -> Result<(), String>;

    /// Clear persistent web storage (local storage, indexed data).
    fn clear_storage(&self) -> Result<(), String>;

    /// Current on-disk size of the view's cache, 0 when unknown.
    fn cache_size(&self) -> u64 {
        0
    }
}

/// Backend for hosts with no web view. Every operation is a successful no-op.
pub struct NullWebView;

impl WebViewBackend for NullWebView {
    fn has_view(&self) -> bool {
        false
    }

    fn clear_view(&self) -> Result<(), String> {
        Ok(())
    }

    fn clear_storage(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Directory-backed view state, the way desktop webview shells keep it:
/// a cache directory and a storage directory under one webview root.
pub struct DirWebView {
    cache_dir: PathBuf,
    storage_dir: PathBuf,
}

impl DirWebView {
    pub fn new(root: PathBuf) -> Self {
        Self {
            cache_dir: root.join("cache"),
            storage_dir: root.join("storage"),
        }
    }
}

impl WebViewBackend for DirWebView {
    fn has_view(&self) -> bool {
        true
    }

    fn clear_view(&self) -> Result<(), String> {
        walker::clear_dir(&self.cache_dir)
            .map_err(|e| format!("cannot clear {}: {e}", self.cache_dir.display()))
    }

    fn clear_storage(&self) -> Result<(), String> {
        walker::delete_tree(&self.storage_dir)
            .map_err(|e| format!("cannot clear {}: {e}", self.storage_dir.display()))
    }

    fn cache_size(&self) -> u64 {
        walker::tree_size(&self.cache_dir) + walker::tree_size(&self.storage_dir)
    }
}
