use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnbundleError {
    // Startup
    #[error("no embedded payload found at {}", .0.display())]
    MissingPayload(PathBuf),

    #[error("cannot create output directory {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Per-entry
    #[error("opendir {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("stat {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("mkdir {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("open {}: {source}", path.display())]
    OpenSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("create {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl UnbundleError {
    /// The path this error occurred at.
    /// Callers use this to present "failed: <path>" without pattern matching on variants.
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingPayload(p) => p,
            Self::DestinationUnwritable { path, .. }
            | Self::ListDir { path, .. }
            | Self::Metadata { path, .. }
            | Self::CreateDir { path, .. }
            | Self::OpenSource { path, .. }
            | Self::CreateFile { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    /// Whether the extraction can continue after this error.
    ///
    /// Recoverable errors are the per-entry kind: they are counted (and
    /// optionally collected) while the walk keeps going with the next
    /// sibling entry.
    ///
    /// The two startup errors (payload root missing, output root not
    /// creatable) abort the run before any extraction work.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::MissingPayload(_) | Self::DestinationUnwritable { .. }
        )
    }
}
