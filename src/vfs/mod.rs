//! Virtual filesystem abstraction
//!
//! Storage backends implement the [`Vfs`] and [`VfsFile`] traits and are
//! selected by name through a [`registry::VfsRegistry`]. The file I/O
//! operations never touch a backend directly; everything goes through an
//! opened handle, and dropping the handle releases the underlying
//! resources exactly once.

pub mod local;
pub mod memory;
pub mod registry;

pub use local::LocalVfs;
pub use memory::MemoryVfs;
pub use registry::VfsRegistry;

use std::io;

/// Access mode for [`Vfs::open`]
///
/// The file I/O functions need exactly two flag sets: read-only for the
/// read path, create + read-write for the write path (which reuses an
/// existing file rather than failing on it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Open an existing file for reading; absent file is `NotFound`
    ReadOnly,
    /// Open for reading and writing, creating the file if absent
    CreateReadWrite,
}

/// An open file handle on a specific VFS backend
///
/// Handles are exclusively owned by the operation that opened them and
/// live for a single invocation. Backends release the underlying
/// resources in their `Drop` implementation, so cleanup is structural:
/// every exit path of an operation closes the handle exactly once.
///
/// All failures are reported as `std::io::Error` so the caller sees the
/// backend's actual error kind and OS code.
pub trait VfsFile {
    /// Current file size in bytes
    ///
    /// Signed so that a misbehaving backend reporting a negative size is
    /// observable by the caller instead of silently wrapping.
    fn size(&mut self) -> io::Result<i64>;

    /// Read exactly `buf.len()` bytes starting at `offset`
    ///
    /// A short read is an error; the caller discards the buffer.
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<()>;

    /// Write all of `data` starting at `offset`
    fn write_at(&mut self, data: &[u8], offset: u64) -> io::Result<()>;

    /// Truncate the file to `len` bytes
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl std::fmt::Debug for dyn VfsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VfsFile")
    }
}

/// A pluggable storage backend
///
/// Implementations perform no work at registration time; all I/O happens
/// through handles returned by [`open`](Vfs::open).
///
/// `NotFound` from a read-only open is the one error kind with dedicated
/// meaning to the read operation (absent file yields a null result); any
/// other kind propagates to the caller unchanged.
pub trait Vfs: Send + Sync {
    /// Backend name as used for registry lookups
    fn name(&self) -> &str;

    /// Open `path` with the given mode
    fn open(&self, path: &str, mode: OpenMode) -> io::Result<Box<dyn VfsFile>>;
}
