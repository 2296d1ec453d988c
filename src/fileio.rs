//! Whole-file read and write operations
//!
//! Each operation is stateless and runs to completion on the calling
//! thread: resolve a VFS by name, open a handle, transfer bytes through a
//! single contiguous buffer, and let the handle drop. There is no retry,
//! no caching, and no coordination between concurrent invocations; the
//! handle and any owned buffer are released on every exit path because
//! both are scoped to the function body.

use crate::error::{FileIoError, Result};
use crate::host::HostEngine;
use crate::vfs::{OpenMode, Vfs};
use std::io;
use std::sync::Arc;
use tracing::debug;

fn resolve_vfs(engine: &dyn HostEngine, vfs_name: Option<&str>) -> Result<Arc<dyn Vfs>> {
    engine.vfs_registry().resolve(vfs_name).ok_or_else(|| {
        FileIoError::VfsNotFound(vfs_name.unwrap_or("<default>").to_string())
    })
}

fn check_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FileIoError::Argument(
            "file path must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Read the entire contents of `path` through the resolved VFS
///
/// Returns `Ok(None)` when the file does not exist — the documented
/// convention distinguishing an absent file from an I/O failure. Any
/// other open failure, and every failure after the open, is an error. A
/// zero-byte file reads as `Ok(Some(vec![]))`.
///
/// The file size is checked against the engine's configured maximum
/// result size before the transfer buffer is allocated, so an oversized
/// file costs no memory.
///
/// # Examples
///
/// ```rust
/// use vfsio_rs::{read_file, Engine};
/// use vfsio_rs::vfs::{MemoryVfs, VfsRegistry};
/// use std::sync::Arc;
///
/// let vfs = Arc::new(MemoryVfs::new("mem"));
/// vfs.insert("/motd", b"welcome".to_vec());
///
/// let mut registry = VfsRegistry::new();
/// registry.register(vfs);
/// let engine = Engine::new(registry);
///
/// assert_eq!(read_file(&engine, "/motd", None).unwrap().unwrap(), b"welcome");
/// assert!(read_file(&engine, "/absent", None).unwrap().is_none());
/// ```
pub fn read_file(
    engine: &dyn HostEngine,
    path: &str,
    vfs_name: Option<&str>,
) -> Result<Option<Vec<u8>>> {
    check_path(path)?;
    let vfs = resolve_vfs(engine, vfs_name)?;
    debug!("Reading {} via vfs '{}'", path, vfs.name());

    // Absent file is a null result; every other open failure is an error.
    let mut file = match vfs.open(path, OpenMode::ReadOnly) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, returning null", path);
            return Ok(None);
        }
        Err(e) => return Err(FileIoError::Io(e)),
    };

    let limit = engine.max_result_size() as u64;
    let size = file.size()?;
    if size < 0 {
        return Err(FileIoError::FileSize(size));
    }
    let size = size as u64;

    if size > limit {
        return Err(FileIoError::TooBig { size, limit });
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(size as usize)
        .map_err(|e| FileIoError::Allocation(format!("{} byte read buffer: {}", size, e)))?;
    buf.resize(size as usize, 0);

    // A short or failed read discards the buffer; only a complete read
    // transfers it to the caller.
    file.read_at(&mut buf, 0)?;

    Ok(Some(buf))
}

/// Overwrite `path` with `payload` through the resolved VFS
///
/// The file is created if absent and truncated to zero before the write,
/// so the result is always exactly `payload` — never a mix of old and
/// new content. Unlike the read path there is no null convention here:
/// any open failure is a hard error. Returns the number of bytes
/// written, which equals the payload length (including 0 for an empty
/// payload).
///
/// This operation has side effects; hosts must register it as
/// non-deterministic and never evaluate it speculatively (see
/// [`host_functions`](crate::host::host_functions)).
pub fn write_file(
    engine: &dyn HostEngine,
    path: &str,
    payload: &[u8],
    vfs_name: Option<&str>,
) -> Result<u64> {
    check_path(path)?;
    let vfs = resolve_vfs(engine, vfs_name)?;
    debug!(
        "Writing {} bytes to {} via vfs '{}'",
        payload.len(),
        path,
        vfs.name()
    );

    let mut file = vfs.open(path, OpenMode::CreateReadWrite)?;

    // Full-overwrite semantics: drop existing content unconditionally.
    file.truncate(0)?;

    if !payload.is_empty() {
        file.write_at(payload, 0)?;
    }

    Ok(payload.len() as u64)
}
