//! Local-disk VFS backend
//!
//! Thin wrapper over `std::fs` with positioned reads and writes. This is
//! the backend a host engine typically registers as its default.

use super::{OpenMode, Vfs, VfsFile};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// VFS backed by the operating system's filesystem
pub struct LocalVfs {
    name: String,
}

impl LocalVfs {
    /// Create a local-disk backend registered under `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        LocalVfs { name: name.into() }
    }
}

impl Vfs for LocalVfs {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, path: &str, mode: OpenMode) -> io::Result<Box<dyn VfsFile>> {
        let file = match mode {
            OpenMode::ReadOnly => OpenOptions::new().read(true).open(path)?,
            OpenMode::CreateReadWrite => OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .open(path)?,
        };

        Ok(Box::new(LocalFile { file }))
    }
}

/// An open file on the local filesystem
struct LocalFile {
    file: File,
}

impl VfsFile for LocalFile {
    fn size(&mut self) -> io::Result<i64> {
        let len = self.file.metadata()?.len();
        Ok(len as i64)
    }

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(buf)
    }

    fn write_at(&mut self, data: &[u8], offset: u64) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(data)?;
        self.file.flush()
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.file.set_len(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.bin");
        let vfs = LocalVfs::new("local");

        let err = vfs
            .open(path.to_str().unwrap(), OpenMode::ReadOnly)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_create_write_read_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        let path = path.to_str().unwrap();
        let vfs = LocalVfs::new("local");

        let mut file = vfs.open(path, OpenMode::CreateReadWrite).unwrap();
        file.write_at(b"hello disk", 0).unwrap();
        assert_eq!(file.size().unwrap(), 10);

        let mut buf = vec![0u8; 10];
        file.read_at(&mut buf, 0).unwrap();
        assert_eq!(&buf, b"hello disk");
    }

    #[test]
    fn test_truncate_shrinks_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shrink.bin");
        let path = path.to_str().unwrap();
        let vfs = LocalVfs::new("local");

        let mut file = vfs.open(path, OpenMode::CreateReadWrite).unwrap();
        file.write_at(b"0123456789", 0).unwrap();
        file.truncate(0).unwrap();
        assert_eq!(file.size().unwrap(), 0);
    }

    #[test]
    fn test_short_read_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("short.bin");
        let path = path.to_str().unwrap();
        let vfs = LocalVfs::new("local");

        let mut file = vfs.open(path, OpenMode::CreateReadWrite).unwrap();
        file.write_at(b"abc", 0).unwrap();

        let mut buf = vec![0u8; 8];
        assert!(file.read_at(&mut buf, 0).is_err());
    }
}
