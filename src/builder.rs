use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::engine::{run, EngineOptions};
use crate::error::UnbundleError;
use crate::mapper::ensure_dir_chain;
use crate::report::Report;
use crate::traits::Observer;
use crate::PAYLOAD_ROOT;

// ---------------------------------------------------------------------------
// ExtractBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing an extraction.
///
/// Created via [`unbundle::extract()`](crate::extract). Configure with
/// chained builder methods, then call [`run()`](ExtractBuilder::run) to
/// execute.
///
/// # Example
///
/// ```rust,ignore
/// let report = unbundle::extract()
///     .destination("out")
///     .observe(my_observer)
///     .collect_errors(true)
///     .run()?;
/// ```
pub struct ExtractBuilder {
    source:         PathBuf,
    destination:    PathBuf,
    observer:       Option<Box<dyn Observer>>,
    collect_errors: bool,
}

impl Default for ExtractBuilder {
    fn default() -> Self {
        Self {
            source:         PathBuf::from(PAYLOAD_ROOT),
            destination:    PathBuf::from("."),
            observer:       None,
            collect_errors: false,
        }
    }
}

impl ExtractBuilder {
    // ── Endpoints ─────────────────────────────────────────────────────────

    /// Set the payload root to extract from.
    ///
    /// Defaults to [`PAYLOAD_ROOT`], the virtual mount point of the archive
    /// embedded in the running executable. Point it elsewhere to extract
    /// any directory tree with the same semantics, or in tests.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    /// Set the directory to extract into.
    ///
    /// Defaults to the current working directory. Created, including any
    /// missing ancestors, before the walk begins.
    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = path.into();
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Set an observer to receive progress and error notifications.
    ///
    /// Any type implementing [`Observer`] is accepted. Without one, the
    /// extraction runs silently and failures surface only as counts in the
    /// final [`Report`].
    pub fn observe(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Retain per-entry error values in [`Report::errors`].
    ///
    /// Disabled by default. [`Report::error_count`] is accurate either way;
    /// this only controls whether the error values themselves are kept.
    pub fn collect_errors(mut self, yes: bool) -> Self {
        self.collect_errors = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the extraction and return its report.
    ///
    /// Blocks until the walk completes.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for the two startup failures: the payload root
    /// missing or not a directory ([`UnbundleError::MissingPayload`]), and
    /// the destination root not creatable
    /// ([`UnbundleError::DestinationUnwritable`]). Per-entry failures never
    /// abort the run — they are counted (and optionally collected) in the
    /// returned [`Report`].
    pub fn run(self) -> Result<Report, UnbundleError> {
        match fs::metadata(&self.source) {
            Ok(metadata) if metadata.is_dir() => {}
            _ => return Err(UnbundleError::MissingPayload(self.source)),
        }

        ensure_dir_chain(&self.destination).map_err(|error| match error {
            UnbundleError::CreateDir { path, source } => {
                UnbundleError::DestinationUnwritable { path, source }
            }
            other => other,
        })?;

        debug!(
            source = %self.source.display(),
            destination = %self.destination.display(),
            "starting extraction"
        );

        let observer = self
            .observer
            .unwrap_or_else(|| Box::new(SilentObserver));

        Ok(run(EngineOptions {
            source_root: self.source,
            destination: self.destination,
            observer,
            collect_errors: self.collect_errors,
        }))
    }
}

// ---------------------------------------------------------------------------
// Default observer
// ---------------------------------------------------------------------------

/// Ignores every notification. Used when no observer is specified.
struct SilentObserver;

impl Observer for SilentObserver {}
