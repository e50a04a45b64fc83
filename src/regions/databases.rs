use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::region::{ClearContext, Region, RegionKind, RegionReport};
use crate::walker;

/// Sidecar suffixes a database engine keeps next to the main file. They must
/// go with the database they belong to, never survive it.
const SIDECAR_SUFFIXES: &[&str] = &["-journal", "-wal", "-shm"];

pub struct Databases;

fn is_sidecar(name: &str) -> bool {
    SIDECAR_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Strip the sidecar suffix to get the primary database file name.
fn primary_of(name: &str) -> Option<&str> {
    SIDECAR_SUFFIXES
        .iter()
        .find_map(|s| name.strip_suffix(s))
}

fn sidecars_of(db: &Path) -> Vec<PathBuf> {
    let Some(name) = db.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Vec::new();
    };
    SIDECAR_SUFFIXES
        .iter()
        .map(|s| db.with_file_name(format!("{name}{s}")))
        .filter(|p| p.exists())
        .collect()
}

/// Database files to delete as primaries. A sidecar whose primary is present
/// is skipped (removed with its primary); an orphaned sidecar counts as a
/// primary of its own.
fn primaries(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return found;
    };
    for entry in read_dir.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_sidecar(&name) {
            let has_primary = primary_of(&name)
                .map(|p| dir.join(p).is_file())
                .unwrap_or(false);
            if has_primary {
                continue;
            }
        }
        found.push(path);
    }
    found
}

impl Region for Databases {
    fn kind(&self) -> RegionKind {
        RegionKind::Databases
    }

    fn label(&self) -> &'static str {
        "Databases"
    }

    fn scan(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();
        for db in primaries(&ctx.layout.databases_dir) {
            let size = walker::entry_size(&db)
                + sidecars_of(&db).iter().map(|p| walker::entry_size(p)).sum::<u64>();
            report.push(db, size);
        }
        report
    }

    fn clear(&self, ctx: &ClearContext) -> RegionReport {
        let mut report = RegionReport::empty();

        for db in primaries(&ctx.layout.databases_dir) {
            let mut freed = 0u64;
            let mut failed = false;

            for victim in std::iter::once(db.clone()).chain(sidecars_of(&db)) {
                let size = walker::entry_size(&victim);
                match std::fs::remove_file(&victim) {
                    Ok(()) => freed += size,
                    Err(e) => {
                        failed = true;
                        warn!(path = %victim.display(), error = %e, "failed to delete database file");
                        report
                            .errors
                            .push(format!("Failed to delete {}: {e}", victim.display()));
                    }
                }
            }

            if !failed {
                debug!(path = %db.display(), freed, "deleted database");
                report.push(db, freed);
            }
        }

        report
    }
}
