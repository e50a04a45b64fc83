use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cachesweep",
    about = "Clear and measure app cache regions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Flags resolving the app data layout. An explicit --data-dir wins over
/// platform-default discovery by --app-id.
#[derive(Args)]
pub struct LayoutArgs {
    /// App data root containing cache/, databases/, shared_prefs/, ...
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// External cache directory
    #[arg(long)]
    pub external_cache: Option<PathBuf>,

    /// App id used to locate the platform-default directories
    #[arg(long, default_value = "cachesweep")]
    pub app_id: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report every region's reclaimable size (dry-run, no deletion)
    Scan {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Print machine-readable JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Clear cache regions (requires --confirm to actually delete)
    Clear {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Actually delete. Without this flag, behaves like scan.
        #[arg(long)]
        confirm: bool,

        /// Clear webview cache, history, form data and web storage
        #[arg(long)]
        webview: bool,

        /// Clear the internal cache directories
        #[arg(long)]
        internal: bool,

        /// Clear the external cache directory
        #[arg(long)]
        external: bool,

        /// Delete application databases (preserved by default)
        #[arg(long)]
        databases: bool,

        /// Delete shared preferences (preserved by default)
        #[arg(long)]
        preferences: bool,
    },

    /// Show internal and external cache sizes
    Info {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Print machine-readable JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Drive the action bridge directly (clearCache, clearCacheSelective,
    /// getCacheInfo) with an optional JSON options bag
    Exec {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Action name as the script side would send it
        action: String,

        /// JSON options bag for clearCacheSelective
        options: Option<String>,
    },
}
