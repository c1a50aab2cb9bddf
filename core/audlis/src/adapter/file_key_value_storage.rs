//! ファイルを使うキー値ストレージ（<dir>/<key>.json）
//!
//! set は一時ファイルへ書いてから rename するので、読み手が書きかけの blob を見ることはない。

use crate::ports::outbound::KeyValueStorage;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

pub struct FileKeyValueStorage {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileKeyValueStorage {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, Error> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::invalid_argument(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path_for(key)?;
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs.read_to_string(&path).map(Some)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        self.fs.create_dir_all(&self.dir)?;
        self.fs.write_atomic(&path, value)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        if self.fs.exists(&path) {
            self.fs.remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use tempfile::tempdir;

    fn storage(dir: &std::path::Path) -> FileKeyValueStorage {
        FileKeyValueStorage::new(Arc::new(StdFileSystem), dir.join("storage"))
    }

    #[test]
    fn test_get_missing_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(storage(dir.path()).get("audlis_entries").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempdir().unwrap();
        let s = storage(dir.path());
        s.set("audlis_lang", "en").unwrap();
        assert_eq!(s.get("audlis_lang").unwrap().as_deref(), Some("en"));
        s.set("audlis_lang", "zh").unwrap();
        assert_eq!(s.get("audlis_lang").unwrap().as_deref(), Some("zh"));
        assert!(dir.path().join("storage").join("audlis_lang.json").exists());
        s.remove("audlis_lang").unwrap();
        assert_eq!(s.get("audlis_lang").unwrap(), None);
        s.remove("audlis_lang").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let s = storage(dir.path());
        let err = s.set("../escape", "x").unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert!(s.get("").is_err());
    }
}
