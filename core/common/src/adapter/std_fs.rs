//! std::fs を使う FileSystem 実装

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

/// 操作名とパスを添えた I/O エラー
fn io_err<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> Error + 'a {
    move |e| Error::io_msg(format!("Failed to {} '{}': {}", action, path.display(), e))
}

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path).map_err(io_err("read", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        self.write_bytes(path, contents.as_bytes())
    }

    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(io_err("write", path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::rename(from, to).map_err(|e| {
            Error::io_msg(format!(
                "Failed to move '{}' over '{}': {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(io_err("create directory", path))
    }

    fn remove_file(&self, path: &Path) -> Result<(), Error> {
        std::fs::remove_file(path).map_err(io_err("remove", path))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err("open for append", path))?;
        Ok(Box::new(f))
    }
}
