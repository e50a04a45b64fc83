use tracing::{debug, warn};

use crate::region::{ClearContext, Region, RegionKind, RegionReport};
use crate::walker;

pub struct SharedPreferences;

impl Region for SharedPreferences {
    fn kind(&self) -> RegionKind {
        RegionKind::Preferences
    }

    fn label(&self) -> &'static str {
        "Shared Preferences"
    }

    fn scan(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();
        let root = &ctx.layout.prefs_dir;
        if root.exists() {
            report.push(root.clone(), walker::tree_size(root));
        }
        report
    }

    fn clear(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();
        let root = ctx.layout.prefs_dir.clone();
        let size = walker::tree_size(&root);

        // The directory is not recreated; the next preference write does it.
        match walker::delete_tree(&root) {
            Ok(()) => {
                debug!(path = %root.display(), freed = size, "cleared shared preferences");
                if size > 0 {
                    report.push(root, size);
                }
            }
            Err(e) => {
                warn!(path = %root.display(), error = %e, "failed to clear shared preferences");
                report
                    .errors
                    .push(format!("Failed to clear {}: {e}", root.display()));
            }
        }
        report
    }
}
