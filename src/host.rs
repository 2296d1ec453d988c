//! Host engine boundary
//!
//! The query engine calls `vfsreadfile` and `vfswritefile` with a slice
//! of [`Value`]s; this module checks arity and types, extracts the path,
//! payload, and optional VFS name, and dispatches to the operations in
//! [`fileio`](crate::fileio). The engine's side of the contract is the
//! [`HostEngine`] trait: a VFS registry snapshot and the configured
//! maximum result size. [`host_functions`] describes how the two
//! functions must be registered (the write path is direct-only and must
//! never be cached or evaluated speculatively).

use crate::error::{FileIoError, Result};
use crate::fileio;
use crate::vfs::VfsRegistry;

/// Default maximum result size in bytes when the host does not configure one
pub const DEFAULT_MAX_RESULT_SIZE: usize = 1_000_000_000;

/// A value crossing the host function boundary
///
/// Only the kinds the two file I/O functions touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// View this value as text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// View this value as a byte payload (blobs and text qualify)
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            Value::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }
}

/// What the file I/O operations consume from the host engine
///
/// The registry is a per-call snapshot; this crate holds no global
/// registration state. The maximum result size bounds any single blob
/// produced to a caller and is queried by the read path only.
pub trait HostEngine {
    /// The VFS backends visible to this call
    fn vfs_registry(&self) -> &VfsRegistry;

    /// Configured ceiling on the byte size of a produced result
    fn max_result_size(&self) -> usize;
}

/// A self-contained [`HostEngine`] for embedders and tests
///
/// # Examples
///
/// ```rust
/// use vfsio_rs::{vfsreadfile, Engine, Value};
/// use vfsio_rs::vfs::{MemoryVfs, VfsRegistry};
/// use std::sync::Arc;
///
/// let vfs = Arc::new(MemoryVfs::new("mem"));
/// vfs.insert("/hello", b"hi".to_vec());
///
/// let mut registry = VfsRegistry::new();
/// registry.register(vfs);
/// let engine = Engine::new(registry);
///
/// let args = [Value::Text("/hello".to_string())];
/// assert_eq!(vfsreadfile(&engine, &args).unwrap(), Value::Blob(b"hi".to_vec()));
/// ```
pub struct Engine {
    registry: VfsRegistry,
    max_result_size: usize,
}

impl Engine {
    /// Create an engine over `registry` with the default result size limit
    pub fn new(registry: VfsRegistry) -> Self {
        Engine {
            registry,
            max_result_size: DEFAULT_MAX_RESULT_SIZE,
        }
    }

    /// Override the maximum result size
    pub fn with_max_result_size(mut self, limit: usize) -> Self {
        self.max_result_size = limit;
        self
    }
}

impl HostEngine for Engine {
    fn vfs_registry(&self) -> &VfsRegistry {
        &self.registry
    }

    fn max_result_size(&self) -> usize {
        self.max_result_size
    }
}

fn text_arg<'a>(args: &'a [Value], idx: usize, what: &str, func: &str) -> Result<&'a str> {
    args[idx]
        .as_text()
        .ok_or_else(|| FileIoError::Argument(format!("{}() {} must be a string", func, what)))
}

fn optional_vfs_arg<'a>(args: &'a [Value], idx: usize, func: &str) -> Result<Option<&'a str>> {
    if args.len() > idx {
        Ok(Some(text_arg(args, idx, "vfs argument", func)?))
    } else {
        Ok(None)
    }
}

/// `vfsreadfile(path[, vfs])` — whole-file read
///
/// Returns a blob with the file's exact contents, or null when the file
/// does not exist.
pub fn vfsreadfile(engine: &dyn HostEngine, args: &[Value]) -> Result<Value> {
    if args.len() != 1 && args.len() != 2 {
        return Err(FileIoError::Argument(
            "vfsreadfile() takes 1 or 2 argument(s)".to_string(),
        ));
    }

    let path = text_arg(args, 0, "argument", "vfsreadfile")?;
    let vfs_name = optional_vfs_arg(args, 1, "vfsreadfile")?;

    match fileio::read_file(engine, path, vfs_name)? {
        Some(blob) => Ok(Value::Blob(blob)),
        None => Ok(Value::Null),
    }
}

/// `vfswritefile(path, payload[, vfs])` — whole-file overwrite
///
/// The payload may be a blob or text; a null or numeric payload is
/// rejected. Returns the number of bytes written as an integer.
pub fn vfswritefile(engine: &dyn HostEngine, args: &[Value]) -> Result<Value> {
    if args.len() != 2 && args.len() != 3 {
        return Err(FileIoError::Argument(
            "vfswritefile() takes 2 or 3 argument(s)".to_string(),
        ));
    }

    let path = text_arg(args, 0, "argument", "vfswritefile")?;
    let payload = args[1]
        .as_bytes()
        .ok_or_else(|| FileIoError::Argument("vfswritefile() cannot get blob".to_string()))?;
    let vfs_name = optional_vfs_arg(args, 2, "vfswritefile")?;

    let written = fileio::write_file(engine, path, payload, vfs_name)?;
    Ok(Value::Integer(written as i64))
}

/// How a host must register one of the exposed functions
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    /// Function name as called from queries
    pub name: &'static str,
    /// Minimum and maximum accepted argument counts
    pub arity: (usize, usize),
    /// Same arguments always produce the same result; safe to cache
    pub deterministic: bool,
    /// Has side effects; must execute exactly once, never speculatively
    pub direct_only: bool,
    /// Entry point
    pub invoke: fn(&dyn HostEngine, &[Value]) -> Result<Value>,
}

/// Registration descriptors for the two exposed functions
///
/// `vfswritefile` is direct-only: the host query planner must not assume
/// it is pure, cache its result, or re-evaluate it.
pub fn host_functions() -> [FunctionDef; 2] {
    [
        FunctionDef {
            name: "vfsreadfile",
            arity: (1, 2),
            deterministic: true,
            direct_only: false,
            invoke: vfsreadfile,
        },
        FunctionDef {
            name: "vfswritefile",
            arity: (2, 3),
            deterministic: false,
            direct_only: true,
            invoke: vfswritefile,
        },
    ]
}
