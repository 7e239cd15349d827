use std::path::PathBuf;

/// A single payload item encountered during the walk.
///
/// Entries are transient — the engine builds one per eligible item, hands it
/// to the [`Observer`](crate::traits::Observer) by reference, and discards it.
/// `relative` is the entry's stable identity: its path with the payload-root
/// prefix stripped, which is also exactly where it lands under the
/// destination root.
pub struct Entry {
    /// Full path under the payload root.
    pub source: PathBuf,

    /// Path relative to the payload root. Unique per entry.
    pub relative: PathBuf,

    /// The entry's name within its parent directory.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Size in bytes, from the metadata query. Meaningful only for files;
    /// directories report 0.
    pub size: u64,
}

/// The kind of a walked entry.
///
/// Classification follows symlinks (a plain `stat`), so everything the walk
/// can reach is either a directory or gets copied as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory, recreated at the destination and recursed into.
    Dir,

    /// Anything else — copied byte-for-byte.
    File,
}
