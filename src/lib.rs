//! # vfsio - Whole-File I/O over Pluggable Virtual Filesystems
//!
//! `vfsio-rs` implements two host-callable query functions, `vfsreadfile`
//! and `vfswritefile`, on top of a virtual filesystem abstraction.
//! Storage backends (local disk, in-memory, archive- or network-backed)
//! implement the [`vfs::Vfs`] trait and are selected by name at call
//! time through a [`vfs::VfsRegistry`] supplied by the host.
//!
//! - **Read** returns a file's entire contents as one blob, null when
//!   the file does not exist, and enforces the engine's configured
//!   maximum result size before allocating anything.
//! - **Write** truncates and rewrites the whole file, returning the
//!   byte count; it is registered direct-only so the host never caches
//!   or re-evaluates it.
//!
//! Handles and buffers are scoped to a single invocation and released
//! on every exit path.
//!
//! ## Quick Start
//!
//! ```rust
//! use vfsio_rs::{read_file, write_file, Engine};
//! use vfsio_rs::vfs::{MemoryVfs, VfsRegistry};
//! use std::sync::Arc;
//!
//! # fn main() -> vfsio_rs::Result<()> {
//! let mut registry = VfsRegistry::new();
//! registry.register(Arc::new(MemoryVfs::new("mem")));
//! let engine = Engine::new(registry);
//!
//! write_file(&engine, "/notes.txt", b"Hello, World!", None)?;
//! let content = read_file(&engine, "/notes.txt", None)?;
//! assert_eq!(content.unwrap(), b"Hello, World!");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fileio;
pub mod host;
pub mod vfs;

// Re-export commonly used types
pub use error::{FileIoError, Result};
pub use fileio::{read_file, write_file};
pub use host::{
    host_functions, vfsreadfile, vfswritefile, Engine, FunctionDef, HostEngine, Value,
    DEFAULT_MAX_RESULT_SIZE,
};
pub use vfs::{LocalVfs, MemoryVfs, OpenMode, Vfs, VfsFile, VfsRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
