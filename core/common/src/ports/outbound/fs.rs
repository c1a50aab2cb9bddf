//! ファイルシステム Outbound ポート
//!
//! ストレージ（キーごとの JSON blob）・ログ（JSONL 追記）・画像の書き出しが使う最小限の操作。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem`。
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    /// バイナリを書き出す（画像など）
    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<(), Error>;
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn remove_file(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// 一時ファイルに書いてから rename で置き換える。
    /// 読み手は書きかけの内容を観測しない。
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), Error> {
        let tmp = staging_path(path)?;
        self.write(&tmp, contents)?;
        self.rename(&tmp, path)
    }
}

/// `dir/name` に対する同じディレクトリ内の一時ファイル `dir/.name.tmp`
pub fn staging_path(path: &Path) -> Result<PathBuf, Error> {
    let name = path
        .file_name()
        .ok_or_else(|| Error::io_msg(format!("Invalid path '{}'", path.display())))?;
    Ok(path.with_file_name(format!(".{}.tmp", name.to_string_lossy())))
}
