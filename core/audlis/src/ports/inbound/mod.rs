//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::AudlisCommand;
use common::error::Error;

/// コマンドを 1 つ実行して終了コードを返す Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出す。
pub trait UseCaseRunner {
    fn run(&self, command: AudlisCommand) -> Result<i32, Error>;
}
