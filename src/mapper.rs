//! Source-to-destination path mapping and directory-chain creation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::UnbundleError;

/// Strip the payload-root prefix from a source path, yielding the entry's
/// relative identity.
///
/// Every source path is constructed by the walker itself by joining names
/// under `root`, so a path that does not start with `root` is a bug in the
/// walker, not a runtime condition.
pub(crate) fn relativize<'a>(source: &'a Path, root: &Path) -> &'a Path {
    source
        .strip_prefix(root)
        .expect("walker source paths always live under the payload root")
}

/// Where a relative payload path lands under the destination root.
///
/// A plain join — no `..` normalization. The payload is produced by the same
/// build pipeline that embeds it, so entry names are trusted.
pub(crate) fn destination_for(destination_root: &Path, relative: &Path) -> PathBuf {
    destination_root.join(relative)
}

/// Create `path` and every missing ancestor, shortest prefix first.
///
/// An already-existing directory at any prefix is fine. Anything else that
/// `mkdir` reports (permission denied, a file squatting on a prefix, disk
/// full) fails the chain, naming the prefix that could not be created.
pub(crate) fn ensure_dir_chain(path: &Path) -> Result<(), UnbundleError> {
    let mut prefix = PathBuf::new();
    for component in path.components() {
        prefix.push(component);
        match fs::create_dir(&prefix) {
            Ok(()) => {}
            Err(source) if source.kind() == io::ErrorKind::AlreadyExists => {
                // `mkdir` says EEXIST for files too; only a directory counts.
                if !prefix.is_dir() {
                    return Err(UnbundleError::CreateDir {
                        path: prefix,
                        source,
                    });
                }
            }
            Err(source) => {
                return Err(UnbundleError::CreateDir {
                    path: prefix,
                    source,
                });
            }
        }
    }
    Ok(())
}
