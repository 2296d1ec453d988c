//! In-memory VFS backend
//!
//! Files live in a map guarded by a `parking_lot` mutex, shared between
//! the backend and its open handles. The backend counts open handles so
//! callers (and the leak tests) can verify that every operation closes
//! what it opened, and it can be flipped read-only to provoke
//! permission-denied failures on the write path.

use super::{OpenMode, Vfs, VfsFile};
use ahash::AHashMap;
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// VFS keeping all file content in memory
///
/// # Examples
///
/// ```rust
/// use vfsio_rs::vfs::{MemoryVfs, OpenMode, Vfs, VfsFile};
///
/// let vfs = MemoryVfs::new("mem");
/// {
///     let mut file = vfs.open("/greeting", OpenMode::CreateReadWrite).unwrap();
///     file.write_at(b"hello", 0).unwrap();
/// }
/// assert_eq!(vfs.open_handles(), 0);
/// ```
pub struct MemoryVfs {
    name: String,
    files: Arc<Mutex<AHashMap<String, Vec<u8>>>>,
    open_handles: Arc<AtomicUsize>,
    read_only: bool,
}

impl MemoryVfs {
    /// Create an empty in-memory backend registered under `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        MemoryVfs {
            name: name.into(),
            files: Arc::new(Mutex::new(AHashMap::new())),
            open_handles: Arc::new(AtomicUsize::new(0)),
            read_only: false,
        }
    }

    /// Reject create/read-write opens with `PermissionDenied`
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of handles currently open on this backend
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }

    /// Whether `path` currently exists
    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().contains_key(path)
    }

    /// Seed a file directly, bypassing the handle layer
    pub fn insert<S: Into<String>>(&self, path: S, content: Vec<u8>) {
        self.files.lock().insert(path.into(), content);
    }
}

impl Vfs for MemoryVfs {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, path: &str, mode: OpenMode) -> io::Result<Box<dyn VfsFile>> {
        let mut files = self.files.lock();

        match mode {
            OpenMode::ReadOnly => {
                if !files.contains_key(path) {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("no such file: {}", path),
                    ));
                }
            }
            OpenMode::CreateReadWrite => {
                if self.read_only {
                    return Err(io::Error::new(
                        io::ErrorKind::PermissionDenied,
                        format!("read-only vfs: {}", self.name),
                    ));
                }
                files.entry(path.to_string()).or_default();
            }
        }
        drop(files);

        self.open_handles.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryFile {
            path: path.to_string(),
            files: Arc::clone(&self.files),
            open_handles: Arc::clone(&self.open_handles),
        }))
    }
}

/// An open handle on a [`MemoryVfs`] file
struct MemoryFile {
    path: String,
    files: Arc<Mutex<AHashMap<String, Vec<u8>>>>,
    open_handles: Arc<AtomicUsize>,
}

impl MemoryFile {
    fn with_content<T>(&self, f: impl FnOnce(&mut Vec<u8>) -> io::Result<T>) -> io::Result<T> {
        let mut files = self.files.lock();
        let content = files.get_mut(&self.path).ok_or_else(|| {
            // File removed out from under an open handle
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file vanished: {}", self.path),
            )
        })?;
        f(content)
    }
}

impl VfsFile for MemoryFile {
    fn size(&mut self) -> io::Result<i64> {
        self.with_content(|content| Ok(content.len() as i64))
    }

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<()> {
        self.with_content(|content| {
            let start = offset as usize;
            let end = start.checked_add(buf.len()).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "read range overflow")
            })?;
            if end > content.len() {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "short read past end of file",
                ));
            }
            buf.copy_from_slice(&content[start..end]);
            Ok(())
        })
    }

    fn write_at(&mut self, data: &[u8], offset: u64) -> io::Result<()> {
        self.with_content(|content| {
            let start = offset as usize;
            let end = start + data.len();
            if content.len() < end {
                content.resize(end, 0);
            }
            content[start..end].copy_from_slice(data);
            Ok(())
        })
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.with_content(|content| {
            content.truncate(len as usize);
            Ok(())
        })
    }
}

impl Drop for MemoryFile {
    fn drop(&mut self) {
        self.open_handles.fetch_sub(1, Ordering::SeqCst);
    }
}
