//! ネットワークを使わない GenerativeModel（--offline 用）
//!
//! 常に失敗を返すので、呼び出し側はフォールバック経路だけを通る。

use crate::domain::ModelName;
use crate::error::Error;
use crate::ports::outbound::GenerativeModel;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct OfflineModel;

impl GenerativeModel for OfflineModel {
    fn name(&self) -> &str {
        "offline"
    }

    fn generate_content(&self, model: &ModelName, _payload: &Value) -> Result<Value, Error> {
        Err(Error::http(format!(
            "offline mode: request to '{}' was not sent",
            model
        )))
    }
}
