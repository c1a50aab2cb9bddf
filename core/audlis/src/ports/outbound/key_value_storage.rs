//! キー値ストレージ Outbound ポート
//!
//! 1 キー = 1 つの文字列 blob。部分書き込みはなく、set は常に全体を置き換える。

use common::error::Error;

pub trait KeyValueStorage: Send + Sync {
    /// 未設定なら Ok(None)
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    /// 値全体を置き換える。読み手は古い値か新しい値のどちらかだけを観測する。
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}
