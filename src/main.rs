mod cli;
mod output;

use std::sync::{mpsc, Arc};

use clap::Parser;
use colored::Colorize;
use serde_json::json;

use cachesweep::walker::format_size;
use cachesweep::{
    AppLayout, Bridge, Capabilities, ClearContext, ClearRequest, DirWebView, RegionKind, Result,
    SweepError, Sweeper, ThreadHost,
};

use cli::{Cli, Command, LayoutArgs};

fn main() {
    cachesweep::logging::init_logging();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Scan { layout, json } => scan(&sweeper_for(&layout)?, None, json, false),
        Command::Clear {
            layout,
            confirm,
            webview,
            internal,
            external,
            databases,
            preferences,
        } => {
            let mut request = ClearRequest::default();
            for (flag, kind) in [
                (webview, RegionKind::WebView),
                (internal, RegionKind::InternalCache),
                (external, RegionKind::ExternalCache),
                (databases, RegionKind::Databases),
                (preferences, RegionKind::Preferences),
            ] {
                if flag {
                    request = request.select(kind);
                }
            }
            if request.is_empty() {
                request = ClearRequest::defaults();
            }
            clear(&sweeper_for(&layout)?, &request, confirm)
        }
        Command::Info { layout, json } => info(&sweeper_for(&layout)?, json),
        Command::Exec {
            layout,
            action,
            options,
        } => exec(sweeper_for(&layout)?, &action, options.as_deref()),
    }
}

fn resolve_layout(args: &LayoutArgs) -> Result<AppLayout> {
    let mut layout = match &args.data_dir {
        Some(dir) => AppLayout::under(dir, None),
        None => AppLayout::discover(&args.app_id)?,
    };
    if let Some(external) = &args.external_cache {
        layout.external_cache = Some(external.clone());
    }
    Ok(layout)
}

fn sweeper_for(args: &LayoutArgs) -> Result<Sweeper> {
    let layout = resolve_layout(args)?;
    let webview = Arc::new(DirWebView::new(layout.webview_dir()));
    Ok(Sweeper::new(ClearContext {
        layout,
        host: Arc::new(ThreadHost::new()),
        webview,
        caps: Capabilities::default(),
    }))
}

/// Dry-run report over the regions, optionally restricted to a request.
fn scan(sweeper: &Sweeper, only: Option<&ClearRequest>, json: bool, footer: bool) -> Result<()> {
    let reports: Vec<_> = sweeper
        .scan()
        .into_iter()
        .filter(|(kind, _, _)| only.map(|req| req.contains(*kind)).unwrap_or(true))
        .collect();

    if json {
        let value = json!(reports
            .iter()
            .map(|(kind, label, report)| {
                json!({
                    "region": kind.name(),
                    "label": label,
                    "bytes": report.total_bytes,
                    "entries": report
                        .entries
                        .iter()
                        .map(|e| json!({
                            "path": e.path.display().to_string(),
                            "bytes": e.size_bytes,
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut grand_total = 0u64;
    for (_, label, report) in &reports {
        output::print_scan_header(label);
        for entry in &report.entries {
            output::print_scan_entry(
                &entry.path.display().to_string(),
                &format_size(entry.size_bytes),
            );
        }
        for err in &report.errors {
            output::print_warning(err);
        }
        output::print_region_total(label, report.total_bytes);
        grand_total += report.total_bytes;
    }
    output::print_grand_total(grand_total);
    if footer {
        output::print_dry_run_footer();
    }
    Ok(())
}

fn clear(sweeper: &Sweeper, request: &ClearRequest, confirm: bool) -> Result<()> {
    if !confirm {
        output::print_no_confirm_warning();
        return scan(sweeper, Some(request), false, true);
    }

    let outcome = sweeper.clear(request);
    for err in &outcome.errors {
        output::print_warning(err);
    }
    output::print_clear_complete(outcome.freed_bytes);

    if outcome.ok() {
        Ok(())
    } else {
        Err(SweepError::Action(outcome.error_message()))
    }
}

fn info(sweeper: &Sweeper, json: bool) -> Result<()> {
    let info = sweeper.cache_info();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        output::print_info_row("Internal cache:", info.internal_cache_size);
        output::print_info_row("External cache:", info.external_cache_size);
        output::print_info_row("Total:", info.total_cache_size);
    }
    Ok(())
}

/// Drive the bridge the way the script side would, waiting for the reply.
fn exec(sweeper: Sweeper, action: &str, options: Option<&str>) -> Result<()> {
    let args = match options {
        Some(raw) => json!([serde_json::from_str::<serde_json::Value>(raw)?]),
        None => json!([]),
    };

    let bridge = Bridge::new(Arc::new(sweeper));
    let (tx, rx) = mpsc::channel();
    let handled = bridge.execute(
        action,
        &args,
        Box::new(move |reply| {
            let _ = tx.send(reply);
        }),
    );
    if !handled {
        return Err(SweepError::UnsupportedAction(action.to_string()));
    }

    match rx.recv() {
        Ok(Ok(serde_json::Value::String(msg))) => {
            println!("{msg}");
            Ok(())
        }
        Ok(Ok(value)) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Ok(Err(msg)) => Err(SweepError::Action(msg)),
        Err(_) => Err(SweepError::Action("no reply from bridge".to_string())),
    }
}
