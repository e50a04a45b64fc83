use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::host::HostContext;
use crate::layout::AppLayout;
use crate::webview::WebViewBackend;

/// One named category of disposable app-managed storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegionKind {
    WebView,
    InternalCache,
    ExternalCache,
    Databases,
    Preferences,
}

impl RegionKind {
    pub const ALL: [RegionKind; 5] = [
        RegionKind::WebView,
        RegionKind::InternalCache,
        RegionKind::ExternalCache,
        RegionKind::Databases,
        RegionKind::Preferences,
    ];

    /// Machine-readable name, matching the selective-clear option fields.
    pub fn name(self) -> &'static str {
        match self {
            RegionKind::WebView => "webview",
            RegionKind::InternalCache => "internal",
            RegionKind::ExternalCache => "external",
            RegionKind::Databases => "databases",
            RegionKind::Preferences => "preferences",
        }
    }
}

/// The set of regions one clear invocation acts on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearRequest {
    regions: BTreeSet<RegionKind>,
}

impl ClearRequest {
    /// The default "clear all" set. Databases and preferences are excluded
    /// on purpose: clearing caches must not destroy app persistence unless
    /// explicitly requested.
    pub fn defaults() -> Self {
        Self {
            regions: BTreeSet::from([
                RegionKind::WebView,
                RegionKind::InternalCache,
                RegionKind::ExternalCache,
            ]),
        }
    }

    /// Build a request from a JSON options bag with boolean fields named
    /// after the regions. Absent, null, or wrong-typed fields count as not
    /// selected; a malformed bag is never an error.
    pub fn from_options(options: &serde_json::Value) -> Self {
        let mut regions = BTreeSet::new();
        for kind in RegionKind::ALL {
            let selected = options
                .get(kind.name())
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false);
            if selected {
                regions.insert(kind);
            }
        }
        Self { regions }
    }

    pub fn select(mut self, kind: RegionKind) -> Self {
        self.regions.insert(kind);
        self
    }

    pub fn contains(&self, kind: RegionKind) -> bool {
        self.regions.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Selected regions in fixed clearing order.
    pub fn iter(&self) -> impl Iterator<Item = RegionKind> + '_ {
        self.regions.iter().copied()
    }
}

/// One path touched while scanning or clearing a region.
pub struct RegionEntry {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Result of scanning or clearing a single region.
pub struct RegionReport {
    pub entries: Vec<RegionEntry>,
    pub total_bytes: u64,
    pub errors: Vec<String>,
}

impl RegionReport {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            total_bytes: 0,
            errors: Vec::new(),
        }
    }

    pub fn push(&mut self, path: PathBuf, size_bytes: u64) {
        self.total_bytes += size_bytes;
        self.entries.push(RegionEntry { path, size_bytes });
    }
}

/// Platform features probed once at startup. An unsupported capability
/// skips the corresponding operation instead of failing it.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    /// Persistent web storage can be wiped through the webview backend.
    pub web_storage: bool,
    /// The runtime keeps a separate compiled-code cache directory.
    pub code_cache: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            web_storage: true,
            code_cache: true,
        }
    }
}

/// Everything a region needs to do its work, passed explicitly.
pub struct ClearContext {
    pub layout: AppLayout,
    pub host: Arc<dyn HostContext>,
    pub webview: Arc<dyn WebViewBackend>,
    pub caps: Capabilities,
}

/// The trait every cache region implements.
pub trait Region {
    fn kind(&self) -> RegionKind;

    /// Human-readable label for display (e.g. "Internal Cache").
    fn label(&self) -> &'static str;

    /// Report what would be cleared and how big it is. Never deletes.
    fn scan(&self, ctx: &ClearContext) -> RegionReport;

    /// Clear the region, reporting freed bytes and any per-path errors.
    fn clear(&self, ctx: &ClearContext) -> RegionReport;
}
