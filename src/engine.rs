use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::region::{ClearContext, ClearRequest, RegionKind, RegionReport};
use crate::regions;
use crate::walker;

/// Outcome of one clear invocation across all selected regions.
#[derive(Debug)]
pub struct ClearOutcome {
    pub freed_bytes: u64,
    pub cleared: Vec<RegionKind>,
    pub errors: Vec<String>,
}

impl ClearOutcome {
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failures collapsed into one human-readable message.
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// Cache sizes in bytes, computed fresh on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheInfo {
    pub internal_cache_size: u64,
    pub external_cache_size: u64,
    pub total_cache_size: u64,
}

/// The engine: selective region clearing and size accounting over one app
/// layout, with host scheduling and webview access injected through the
/// context.
pub struct Sweeper {
    ctx: ClearContext,
}

impl Sweeper {
    pub fn new(ctx: ClearContext) -> Self {
        Self { ctx }
    }

    pub fn ctx(&self) -> &ClearContext {
        &self.ctx
    }

    /// Clear every selected region in fixed order. A failing region is
    /// reported but does not abort the remaining ones, and regions already
    /// cleared stay cleared.
    pub fn clear(&self, request: &ClearRequest) -> ClearOutcome {
        let mut outcome = ClearOutcome {
            freed_bytes: 0,
            cleared: Vec::new(),
            errors: Vec::new(),
        };

        for kind in request.iter() {
            let region = regions::region_for(kind);
            debug!(region = region.label(), "clearing region");
            let report = region.clear(&self.ctx);
            outcome.freed_bytes += report.total_bytes;
            if report.errors.is_empty() {
                outcome.cleared.push(kind);
            }
            outcome.errors.extend(report.errors);
        }

        outcome
    }

    /// Dry run: what each region would clear, and how big it is.
    pub fn scan(&self) -> Vec<(RegionKind, &'static str, RegionReport)> {
        regions::all_regions()
            .iter()
            .map(|r| (r.kind(), r.label(), r.scan(&self.ctx)))
            .collect()
    }

    /// Measure the internal and external cache trees. Read-only; repeated
    /// calls with no interleaving writes return identical values.
    pub fn cache_info(&self) -> CacheInfo {
        let layout = &self.ctx.layout;
        let (internal, external) = rayon::join(
            || walker::tree_size(&layout.internal_cache),
            || {
                layout
                    .external_cache
                    .as_deref()
                    .map(walker::tree_size)
                    .unwrap_or(0)
            },
        );
        CacheInfo {
            internal_cache_size: internal,
            external_cache_size: external,
            total_cache_size: internal + external,
        }
    }
}
