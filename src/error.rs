//! Error types for VFS file I/O operations

use thiserror::Error;

/// Errors produced by the file I/O functions
///
/// The variants mirror the failure classes a host engine distinguishes:
/// bad arguments, VFS resolution, allocation, size invariants, and
/// underlying I/O. I/O failures keep the error reported by the VFS
/// backend (error kind plus OS code) rather than a generic message.
#[derive(Error, Debug)]
pub enum FileIoError {
    /// Wrong arity or argument type at the host function boundary
    #[error("{0}")]
    Argument(String),

    /// A VFS name was supplied but no backend with that name is registered
    #[error("cannot find specified vfs: {0}")]
    VfsNotFound(String),

    /// Handle or buffer allocation failed (out-of-memory class, not I/O)
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// The VFS reported a negative file size
    #[error("cannot get file size (reported {0})")]
    FileSize(i64),

    /// The file is larger than the engine's configured maximum result size
    #[error("result too large: {size} bytes exceeds limit of {limit}")]
    TooBig { size: u64, limit: u64 },

    /// Open, size-query, read, write, or truncate failure from the VFS
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FileIoError>;
