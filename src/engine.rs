use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::copy::copy_file;
use crate::entry::{Entry, EntryKind};
use crate::error::UnbundleError;
use crate::mapper::{destination_for, ensure_dir_chain, relativize};
use crate::report::{ExtractStats, Report};
use crate::traits::Observer;
use crate::INTERNAL_ENTRIES;

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
///
/// `pub(crate)` — not part of the public API. Callers configure these via
/// the builder methods (`.source()`, `.destination()`, `.observe()`,
/// `.collect_errors()`).
pub(crate) struct EngineOptions {
    pub source_root:    PathBuf,
    pub destination:    PathBuf,
    pub observer:       Box<dyn Observer>,
    pub collect_errors: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute the extraction described by `opts`.
///
/// This is the core engine — the whole walk lives here. Called by
/// `ExtractBuilder::run()` after the startup checks have passed, so the
/// payload root is known to be a listable directory and the destination
/// root exists.
pub(crate) fn run(opts: EngineOptions) -> Report {
    let source_root = opts.source_root;

    let mut ctx = WalkContext {
        source_root: source_root.clone(),
        destination: opts.destination,
        observer: opts.observer,
        collect_errors: opts.collect_errors,
        dirs: 0,
        files: 0,
        bytes: 0,
        errors: Vec::new(),
    };

    let start = Instant::now();
    let error_count = walk(&source_root, &mut ctx);
    let duration = start.elapsed();

    debug!(
        dirs = ctx.dirs,
        files = ctx.files,
        bytes = ctx.bytes,
        errors = error_count,
        "walk finished"
    );

    Report {
        dirs: ctx.dirs,
        files: ctx.files,
        bytes: ctx.bytes,
        error_count,
        errors: ctx.errors,
        stats: ExtractStats::compute(ctx.bytes, duration),
    }
}

// ---------------------------------------------------------------------------
// Recursive walker
// ---------------------------------------------------------------------------

/// State shared down the recursion. The counters are owned exclusively by
/// the in-progress walk; the error count itself travels up the call stack
/// as each level's return value.
struct WalkContext {
    source_root:    PathBuf,
    destination:    PathBuf,
    observer:       Box<dyn Observer>,
    collect_errors: bool,
    dirs:           usize,
    files:          usize,
    bytes:          u64,
    errors:         Vec<UnbundleError>,
}

impl WalkContext {
    /// Report a per-entry failure: notify the observer immediately, retain
    /// the value only when collection is on. The caller counts it.
    fn record(&mut self, error: UnbundleError) {
        self.observer.on_error(&error);
        if self.collect_errors {
            self.errors.push(error);
        }
    }
}

/// Walk one payload directory depth-first, materializing everything under
/// it, and return the number of per-entry failures in this subtree.
///
/// Failures never abort the walk: each one is recorded and the loop moves
/// on to the next sibling. The single exception is a directory that cannot
/// be listed at all, which short-circuits that subtree with a count of 1.
fn walk(dir: &Path, ctx: &mut WalkContext) -> usize {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(source) => {
            ctx.record(UnbundleError::ListDir {
                path: dir.to_path_buf(),
                source,
            });
            return 1;
        }
    };

    let mut errors = 0;

    for item in listing {
        let item = match item {
            Ok(item) => item,
            Err(source) => {
                ctx.record(UnbundleError::ListDir {
                    path: dir.to_path_buf(),
                    source,
                });
                errors += 1;
                continue;
            }
        };

        // Entries the embedding mechanism reserves for itself never reach
        // the destination. Skipping a directory here skips its subtree.
        let name = item.file_name();
        if is_internal(&name) {
            debug!(name = %name.to_string_lossy(), "skipping internal entry");
            continue;
        }

        let source_path = item.path();

        let metadata = match fs::metadata(&source_path) {
            Ok(metadata) => metadata,
            Err(source) => {
                ctx.record(UnbundleError::Metadata {
                    path: source_path,
                    source,
                });
                errors += 1;
                continue;
            }
        };

        let relative = relativize(&source_path, &ctx.source_root).to_path_buf();
        let destination = destination_for(&ctx.destination, &relative);

        if metadata.is_dir() {
            if let Err(error) = ensure_dir_chain(&destination) {
                ctx.record(error);
                errors += 1;
                // A subtree whose directory could not be created is
                // unreachable at the destination; don't descend.
                continue;
            }

            ctx.dirs += 1;
            let entry = Entry {
                source: source_path.clone(),
                relative,
                name: name.to_string_lossy().into_owned(),
                kind: EntryKind::Dir,
                size: 0,
            };
            ctx.observer.on_dir(&entry);

            errors += walk(&source_path, ctx);
        } else {
            // The destination's parent may not exist yet when the payload
            // nests files under directories of its own.
            if let Some(parent) = destination.parent() {
                if let Err(error) = ensure_dir_chain(parent) {
                    ctx.record(error);
                    errors += 1;
                    continue;
                }
            }

            match copy_file(&source_path, &destination) {
                Ok(written) => {
                    ctx.files += 1;
                    ctx.bytes += written;
                    let entry = Entry {
                        source: source_path,
                        relative,
                        name: name.to_string_lossy().into_owned(),
                        kind: EntryKind::File,
                        size: metadata.len(),
                    };
                    ctx.observer.on_file(&entry);
                }
                Err(error) => {
                    ctx.record(error);
                    errors += 1;
                }
            }
        }
    }

    errors
}

/// Exact, case-sensitive match against the fixed internal-entry table.
fn is_internal(name: &std::ffi::OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| INTERNAL_ENTRIES.contains(&name))
}
