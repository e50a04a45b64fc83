mod databases;
mod external;
mod internal;
mod preferences;
mod webview;

use crate::region::{Region, RegionKind};

/// All regions, in fixed clearing order.
pub fn all_regions() -> Vec<Box<dyn Region>> {
    vec![
        Box::new(webview::WebViewData),
        Box::new(internal::InternalCaches),
        Box::new(external::ExternalCaches),
        Box::new(databases::Databases),
        Box::new(preferences::SharedPreferences),
    ]
}

pub fn region_for(kind: RegionKind) -> Box<dyn Region> {
    match kind {
        RegionKind::WebView => Box::new(webview::WebViewData),
        RegionKind::InternalCache => Box::new(internal::InternalCaches),
        RegionKind::ExternalCache => Box::new(external::ExternalCaches),
        RegionKind::Databases => Box::new(databases::Databases),
        RegionKind::Preferences => Box::new(preferences::SharedPreferences),
    }
}
