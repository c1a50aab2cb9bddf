//! Gemini generateContent クライアント（REST, blocking）

use crate::domain::ModelName;
use crate::error::Error;
use crate::ports::outbound::{EnvResolver, GenerativeModel};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini REST クライアント
///
/// API キーは呼び出しのたびに環境変数から読む。キーが無いことは
/// 起動時エラーではなく、その呼び出しの失敗として扱う。
pub struct GeminiClient {
    base_url: String,
    api_key_envs: Vec<String>,
    timeout: Duration,
    env: Arc<dyn EnvResolver>,
}

impl GeminiClient {
    /// # Arguments
    /// * `base_url` - 例: "https://generativelanguage.googleapis.com/v1beta"
    /// * `api_key_envs` - API キーを読む環境変数名（先頭から順に試す）
    /// * `timeout` - 1 リクエストの上限時間
    pub fn new(
        base_url: impl Into<String>,
        api_key_envs: Vec<String>,
        timeout: Duration,
        env: Arc<dyn EnvResolver>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key_envs,
            timeout,
            env,
        }
    }

    fn api_key(&self) -> Result<String, Error> {
        self.api_key_envs
            .iter()
            .find_map(|name| self.env.var(name))
            .ok_or_else(|| {
                Error::env(format!(
                    "{} environment variable is not set",
                    self.api_key_envs.join(" / ")
                ))
            })
    }

    fn endpoint(&self, model: &ModelName) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

impl GenerativeModel for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate_content(&self, model: &ModelName, payload: &Value) -> Result<Value, Error> {
        let api_key = self.api_key()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        let response = client
            .post(self.endpoint(model))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .body(payload.to_string())
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(format!(
                        "Gemini request timed out after {}s",
                        self.timeout.as_secs()
                    ))
                } else {
                    Error::http(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text));
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        let v: Value = serde_json::from_str(&response_text)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }
        Ok(v)
    }
}

/// candidates[0] の parts のうち最初の text
pub fn first_text_part(response: &Value) -> Option<String> {
    response["candidates"][0]["content"]["parts"]
        .as_array()?
        .iter()
        .find_map(|part| part["text"].as_str())
        .map(str::to_string)
}

/// インライン画像 part（base64 データと MIME タイプ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    pub mime_type: Option<String>,
    pub data: String,
}

/// candidates[0] の parts のうち最初の inlineData
pub fn first_inline_data(response: &Value) -> Option<InlineData> {
    response["candidates"][0]["content"]["parts"]
        .as_array()?
        .iter()
        .find_map(|part| {
            let inline = part.get("inlineData").or_else(|| part.get("inline_data"))?;
            let data = inline["data"].as_str()?;
            let mime_type = inline
                .get("mimeType")
                .or_else(|| inline.get("mime_type"))
                .and_then(|m| m.as_str())
                .map(str::to_string);
            Some(InlineData {
                mime_type,
                data: data.to_string(),
            })
        })
}
