use std::sync::mpsc;

use tracing::{debug, warn};

use crate::region::{ClearContext, Region, RegionKind, RegionReport};

pub struct WebViewData;

impl Region for WebViewData {
    fn kind(&self) -> RegionKind {
        RegionKind::WebView
    }

    fn label(&self) -> &'static str {
        "WebView Data"
    }

    fn scan(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();
        let size = ctx.webview.cache_size();
        if size > 0 {
            report.push(ctx.layout.webview_dir(), size);
        }
        report
    }

    /// The view object is only safe to touch on its owning thread, so the
    /// whole step runs through `run_foreground` and this flow waits for it
    /// to complete before reporting.
    fn clear(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();
        let size_before = ctx.webview.cache_size();

        let backend = ctx.webview.clone();
        let caps = ctx.caps;
        let (tx, rx) = mpsc::channel();

        ctx.host.run_foreground(Box::new(move || {
            let mut errors = Vec::new();

            if backend.has_view() {
                if let Err(e) = backend.clear_view() {
                    // Storage fallback below is still attempted.
                    warn!(error = %e, "webview clear failed, falling back to storage");
                    errors.push(format!("Failed to clear webview: {e}"));
                }
            }

            if caps.web_storage {
                if let Err(e) = backend.clear_storage() {
                    warn!(error = %e, "web storage clear failed");
                    errors.push(format!("Failed to clear web storage: {e}"));
                }
            }

            let _ = tx.send(errors);
        }));

        match rx.recv() {
            Ok(errors) => report.errors = errors,
            Err(_) => {
                report
                    .errors
                    .push("WebView clear did not run on the foreground thread".to_string());
            }
        }

        if report.errors.is_empty() {
            let freed = size_before.saturating_sub(ctx.webview.cache_size());
            debug!(freed, "cleared webview data");
            if freed > 0 {
                report.push(ctx.layout.webview_dir(), freed);
            }
        }

        report
    }
}
