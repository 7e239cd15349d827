use crate::entry::Entry;
use crate::error::UnbundleError;

/// Receives progress and error notifications while the extraction runs.
///
/// Implement this to render progress however the embedding program wants —
/// console lines, a progress bar, a log, or nothing. All methods have empty
/// default bodies, so an implementation only overrides what it cares about.
///
/// # Call Contract
///
/// [`on_dir`](Observer::on_dir) and [`on_file`](Observer::on_file) fire only
/// after the corresponding destination entity exists: the directory has been
/// created, or the file's bytes have been fully copied.
/// [`on_error`](Observer::on_error) fires immediately for every per-entry
/// failure, in walk order, before the walk moves on to the next sibling.
///
/// # Object Safety
///
/// `Observer` is object-safe. The builder stores observers as
/// `Box<dyn Observer>` and the engine calls them through that box.
///
/// The walk is single-threaded and the engine owns the observer exclusively,
/// so no `Send`/`Sync` bounds are required and implementations may carry
/// plain mutable state.
///
/// # Example
///
/// ```rust
/// use unbundle::{Entry, Observer};
///
/// struct FileLister(Vec<String>);
///
/// impl Observer for FileLister {
///     fn on_file(&mut self, entry: &Entry) {
///         self.0.push(entry.relative.display().to_string());
///     }
/// }
/// ```
pub trait Observer {
    /// A directory has been created at the destination. The walk descends
    /// into it next.
    fn on_dir(&mut self, _entry: &Entry) {}

    /// A file has been copied to the destination in full.
    fn on_file(&mut self, _entry: &Entry) {}

    /// A per-entry failure. The walk continues with the next sibling; the
    /// error is also counted in the final [`Report`](crate::Report).
    fn on_error(&mut self, _error: &UnbundleError) {}
}
