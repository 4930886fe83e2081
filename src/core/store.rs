//! Storage behind the times file.
//!
//! The engine works on any stream that can be read, written, seeked and cut
//! to a given length: the real file, or an in-memory buffer in tests.

use std::fs::{File, OpenOptions};
use std::io::{self, Cursor, Read, Seek, Write};
use std::path::Path;

pub trait LogStream: Read + Write + Seek {
    /// Cut the stream to `len` bytes.
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl LogStream for File {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

impl LogStream for Cursor<Vec<u8>> {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len).map_err(io::Error::other)?;
        self.get_mut().truncate(len);
        Ok(())
    }
}

/// Open the times file for begin/end, creating it when missing.
/// Existing content is never truncated on open.
pub fn open_for_update(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
}

/// Open the times file read-only. `Ok(None)` when it does not exist yet.
pub fn open_for_read(path: &Path) -> io::Result<Option<File>> {
    match File::open(path) {
        Ok(f) => Ok(Some(f)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
