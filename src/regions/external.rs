use tracing::{debug, warn};

use crate::region::{ClearContext, Region, RegionKind, RegionReport};
use crate::walker;

pub struct ExternalCaches;

impl Region for ExternalCaches {
    fn kind(&self) -> RegionKind {
        RegionKind::ExternalCache
    }

    fn label(&self) -> &'static str {
        "External Cache"
    }

    fn scan(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();
        if let Some(root) = &ctx.layout.external_cache {
            report.push(root.clone(), walker::tree_size(root));
        }
        report
    }

    fn clear(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();

        // Hosts without external storage have nothing to do here.
        let Some(root) = ctx.layout.external_cache.clone() else {
            return report;
        };

        let size = walker::tree_size(&root);
        match walker::clear_dir(&root) {
            Ok(()) => {
                debug!(path = %root.display(), freed = size, "cleared external cache");
                report.push(root, size);
            }
            Err(e) => {
                warn!(path = %root.display(), error = %e, "failed to clear external cache");
                report
                    .errors
                    .push(format!("Failed to clear {}: {e}", root.display()));
            }
        }
        report
    }
}
