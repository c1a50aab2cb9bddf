//! エントリ集合の永続化 Outbound ポート
//!
//! 読み込みは起動時に 1 回、書き込みは変更のたびに集合全体。
//! 数百件・単一ユーザー・単一端末を前提にした形式で、それ以上の規模には向かない。

use crate::domain::KnowledgeEntry;
use common::error::Error;

pub trait EntryPersistence: Send + Sync {
    /// 保存済みの集合（新しい順）。未保存なら空。壊れていれば Err。
    fn load(&self) -> Result<Vec<KnowledgeEntry>, Error>;
    /// 集合全体を保存する
    fn save(&self, entries: &[KnowledgeEntry]) -> Result<(), Error>;
    /// 保存済みの集合を消す（次回の load は空）
    fn clear(&self) -> Result<(), Error>;
    /// 読めなかった保存内容を退避先に写す（以後の save で上書きされても失われない）
    fn back_up_unreadable(&self) -> Result<(), Error>;
}
