//! # unbundle
//!
//! Self-extractor for archive payloads embedded in Actually Portable
//! Executables.
//!
//! Cosmopolitan Libc exposes the zip archive appended to an APE binary as a
//! read-only virtual filesystem mounted at `/zip/`. unbundle walks that
//! tree depth-first and recreates it, byte-for-byte, at a destination on
//! the real filesystem — tolerating per-entry failures, which are counted
//! and reported instead of aborting the run. It owns the walk engine, the
//! path mapping, the copy loop, the error type, and the builder API. It
//! does **not** own output formatting — progress rendering belongs to the
//! caller, through the [`Observer`] seam.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let report = unbundle::extract()
//!     .destination("payload_out")
//!     .run()
//!     .expect("no payload in this binary");
//!
//! println!(
//!     "{} files and {} directories, {} failures",
//!     report.files, report.dirs, report.error_count
//! );
//! ```
//!
//! # Custom Observers
//!
//! Implement [`Observer`] to render progress and failures however the
//! embedding program wants:
//!
//! ```rust
//! use unbundle::{Entry, Observer, UnbundleError};
//!
//! struct Console;
//!
//! impl Observer for Console {
//!     fn on_file(&mut self, entry: &Entry) {
//!         println!("{}  ({} bytes)", entry.relative.display(), entry.size);
//!     }
//!
//!     fn on_error(&mut self, error: &UnbundleError) {
//!         eprintln!("failed: {error}");
//!     }
//! }
//! ```
//!
//! # Failure Model
//!
//! Only two conditions abort a run before any work: the payload root
//! missing, and the destination root not creatable. Everything after that
//! is per-entry: a failed entry is reported, counted, and the walk moves
//! on to the next sibling. There is no rollback — entries materialized
//! before a failure stay on disk.

#![forbid(unsafe_code)]

mod builder;
mod copy;
mod engine;
mod entry;
mod error;
mod mapper;
mod report;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ExtractBuilder;
pub use entry::{Entry, EntryKind};
pub use error::UnbundleError;
pub use report::{ExtractStats, Report};
pub use traits::Observer;

// ── Payload constants ─────────────────────────────────────────────────────────

/// Mount point of the embedded payload, provided by Cosmopolitan Libc for
/// the lifetime of the process. Fixed at build time; the builder's
/// [`source`](ExtractBuilder::source) override exists for embedding and
/// tests, not for end users.
pub const PAYLOAD_ROOT: &str = "/zip/";

/// Entries Cosmopolitan Libc places in the payload for its own use: the
/// metadata marker and the per-architecture symbol tables. They are not
/// part of the user payload and are never extracted — matched by exact,
/// case-sensitive name at any depth; a matching directory suppresses its
/// whole subtree.
pub const INTERNAL_ENTRIES: &[&str] = &[".cosmo", ".symtab.amd64", ".symtab.arm64"];

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`ExtractBuilder`] to configure and run an extraction.
///
/// # Example
///
/// ```rust,no_run
/// let report = unbundle::extract()
///     .destination("out")
///     .collect_errors(true)
///     .run()
///     .expect("no payload in this binary");
///
/// for error in &report.errors {
///     eprintln!("{error}");
/// }
/// ```
pub fn extract() -> ExtractBuilder {
    ExtractBuilder::default()
}
