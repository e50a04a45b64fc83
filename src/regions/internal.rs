use std::path::Path;

use tracing::{debug, warn};

use crate::region::{ClearContext, Region, RegionKind, RegionReport};
use crate::walker;

/// Names of file-store children that hold disposable data.
const SWEEPABLE_MARKERS: &[&str] = &["cache", "temp"];

pub struct InternalCaches;

fn is_sweepable(name: &str) -> bool {
    SWEEPABLE_MARKERS.iter().any(|m| name.contains(m))
}

/// Direct children of `dir` whose name marks them as disposable.
fn sweepable_children(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut found = Vec::new();
    if let Ok(read_dir) = std::fs::read_dir(dir) {
        for entry in read_dir.flatten() {
            if is_sweepable(&entry.file_name().to_string_lossy()) {
                found.push(entry.path());
            }
        }
    }
    found
}

impl InternalCaches {
    fn roots(ctx: &ClearContext) -> Vec<std::path::PathBuf> {
        let mut roots = vec![ctx.layout.internal_cache.clone()];
        if ctx.caps.code_cache {
            roots.push(ctx.layout.code_cache.clone());
        }
        roots
    }
}

impl Region for InternalCaches {
    fn kind(&self) -> RegionKind {
        RegionKind::InternalCache
    }

    fn label(&self) -> &'static str {
        "Internal Cache"
    }

    fn scan(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();
        for root in Self::roots(ctx) {
            report.push(root.clone(), walker::tree_size(&root));
        }
        for child in sweepable_children(&ctx.layout.files_dir)
            .into_iter()
            .chain(sweepable_children(&ctx.layout.no_backup_dir))
        {
            let size = walker::entry_size(&child);
            report.push(child, size);
        }
        report
    }

    fn clear(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();

        // Cache roots are recreated empty so the app can keep writing there.
        for root in Self::roots(ctx) {
            let size = walker::tree_size(&root);
            match walker::clear_dir(&root) {
                Ok(()) => {
                    debug!(path = %root.display(), freed = size, "cleared cache root");
                    report.push(root, size);
                }
                Err(e) => {
                    warn!(path = %root.display(), error = %e, "failed to clear cache root");
                    report
                        .errors
                        .push(format!("Failed to clear {}: {e}", root.display()));
                }
            }
        }

        // Disposable children of the file stores are deleted outright.
        for child in sweepable_children(&ctx.layout.files_dir)
            .into_iter()
            .chain(sweepable_children(&ctx.layout.no_backup_dir))
        {
            let size = walker::entry_size(&child);
            match walker::delete_tree(&child) {
                Ok(()) => report.push(child, size),
                Err(e) => {
                    report
                        .errors
                        .push(format!("Failed to remove {}: {e}", child.display()));
                }
            }
        }

        report
    }
}
