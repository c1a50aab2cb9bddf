//! 構造化合成 Outbound ポート
//!
//! 転写文をモデルに送り、スキーマ付き JSON のテキストを受け取る。
//! 応答の検証・既定値の補完は usecase（SynthesisDraft::decode）が行う。

use crate::domain::SynthesisRequest;
use common::error::Error;

pub trait KnowledgeSynthesizer: Send + Sync {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<String, Error>;
}
