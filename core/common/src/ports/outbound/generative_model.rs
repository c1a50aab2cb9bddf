//! 生成モデル Outbound ポート
//!
//! generateContent 形式のリクエスト JSON を渡し、レスポンス JSON を受け取る。
//! ペイロードの組み立てと応答の解釈は呼び出し側（adapter）の責務。

use crate::domain::ModelName;
use crate::error::Error;
use serde_json::Value;

/// 単発の generateContent 呼び出し
pub trait GenerativeModel: Send + Sync {
    /// プロバイダ名（ログ用）
    fn name(&self) -> &str;

    /// `model` に `payload` を送り、レスポンス JSON を返す
    fn generate_content(&self, model: &ModelName, payload: &Value) -> Result<Value, Error>;
}
