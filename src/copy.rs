//! Byte-exact single-file copy.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::UnbundleError;

/// Chunk size for the read/write loop.
const CHUNK: usize = 64 * 1024;

/// Copy the contents of `source` to `destination`, truncating anything
/// already there. Returns the number of bytes written.
///
/// Reads fixed-size chunks and flushes each one fully before the next read.
/// A read error after some bytes have been written leaves a truncated
/// destination file behind — extraction is not transactional. Both handles
/// are dropped on every exit path.
pub(crate) fn copy_file(source: &Path, destination: &Path) -> Result<u64, UnbundleError> {
    let mut reader = File::open(source).map_err(|e| UnbundleError::OpenSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut writer = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)
        .map_err(|e| UnbundleError::CreateFile {
            path: destination.to_path_buf(),
            source: e,
        })?;

    let mut buf = vec![0u8; CHUNK];
    let mut written = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(UnbundleError::Read {
                    path: source.to_path_buf(),
                    source: e,
                });
            }
        };

        // write_all loops on partial writes until the chunk is flushed.
        writer
            .write_all(&buf[..n])
            .map_err(|e| UnbundleError::Write {
                path: destination.to_path_buf(),
                source: e,
            })?;
        written += n as u64;
    }

    Ok(written)
}
