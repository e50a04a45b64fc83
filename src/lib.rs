pub mod bridge;
pub mod engine;
pub mod error;
pub mod host;
pub mod layout;
pub mod logging;
pub mod region;
pub mod regions;
pub mod walker;
pub mod webview;

pub use bridge::{Bridge, ResultCallback};
pub use engine::{CacheInfo, ClearOutcome, Sweeper};
pub use error::{Result, SweepError};
pub use host::{DirectHost, HostContext, ThreadHost};
pub use layout::AppLayout;
pub use region::{Capabilities, ClearContext, ClearRequest, Region, RegionKind};
pub use webview::{DirWebView, NullWebView, WebViewBackend};
