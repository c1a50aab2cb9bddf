//! settings.json 用の設定型
//!
//! モデル名・API キーの環境変数名・エンドポイント・タイムアウトを上書きするための構造体。
//! ファイルが無ければすべて既定値。

use common::domain::{HomeDir, ModelName};
use common::error::Error;
use common::llm::gemini::DEFAULT_BASE_URL;
use common::ports::outbound::FileSystem;
use serde::Deserialize;
use std::time::Duration;

pub const SETTINGS_FILENAME: &str = "settings.json";

const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// 旧 Web 版が読んでいた変数名。二番目の候補として受け付ける。
const LEGACY_API_KEY_ENV: &str = "API_KEY";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ASPECT_RATIO: &str = "1:1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub text_model: ModelName,
    pub image_model: ModelName,
    pub api_key_env: String,
    pub base_url: String,
    pub timeout: Duration,
    pub aspect_ratio: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text_model: ModelName::new(DEFAULT_TEXT_MODEL),
            image_model: ModelName::new(DEFAULT_IMAGE_MODEL),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
        }
    }
}

/// serde 用の内部構造（すべて省略可）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsRaw {
    text_model: Option<String>,
    image_model: Option<String>,
    api_key_env: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    aspect_ratio: Option<String>,
}

impl Settings {
    /// JSON 文字列からパース（ファイル読みは load で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: SettingsRaw = serde_json::from_str(json)?;
        let d = Settings::default();
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Ok(Settings {
            text_model: non_empty(raw.text_model).map(ModelName::new).unwrap_or(d.text_model),
            image_model: non_empty(raw.image_model).map(ModelName::new).unwrap_or(d.image_model),
            api_key_env: non_empty(raw.api_key_env).unwrap_or(d.api_key_env),
            base_url: non_empty(raw.base_url).unwrap_or(d.base_url),
            timeout: raw
                .timeout_secs
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(d.timeout),
            aspect_ratio: non_empty(raw.aspect_ratio).unwrap_or(d.aspect_ratio),
        })
    }

    /// `<home>/settings.json` を読む。無ければ既定値、壊れていれば設定エラー。
    pub fn load(fs: &dyn FileSystem, home: &HomeDir) -> Result<Self, Error> {
        let path = home.join(SETTINGS_FILENAME);
        if !fs.exists(&path) {
            return Ok(Settings::default());
        }
        let content = fs.read_to_string(&path)?;
        Settings::parse(&content)
            .map_err(|e| Error::env(format!("Invalid {}: {}", path.display(), e)))
    }

    /// API キーを探す環境変数名（先頭優先）
    pub fn api_key_envs(&self) -> Vec<String> {
        let mut envs = vec![self.api_key_env.clone()];
        if self.api_key_env != LEGACY_API_KEY_ENV {
            envs.push(LEGACY_API_KEY_ENV.to_string());
        }
        envs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(Settings::parse("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_overrides() {
        let json = r#"
        {
            "text_model": "gemini-2.5-pro",
            "api_key_env": "AUDLIS_KEY",
            "timeout_secs": 5,
            "aspect_ratio": "16:9"
        }
        "#;
        let s = Settings::parse(json).unwrap();
        assert_eq!(s.text_model.as_str(), "gemini-2.5-pro");
        assert_eq!(s.image_model.as_str(), DEFAULT_IMAGE_MODEL);
        assert_eq!(s.timeout, Duration::from_secs(5));
        assert_eq!(s.aspect_ratio, "16:9");
        assert_eq!(s.api_key_envs(), vec!["AUDLIS_KEY".to_string(), "API_KEY".to_string()]);
    }

    #[test]
    fn test_parse_ignores_blank_and_zero() {
        let s = Settings::parse(r#"{"text_model": " ", "timeout_secs": 0}"#).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(Settings::parse(r#"{"txt_model": "x"}"#).is_err());
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = tempdir().unwrap();
        let home = HomeDir::new(dir.path());
        assert_eq!(Settings::load(&StdFileSystem, &home).unwrap(), Settings::default());

        std::fs::write(dir.path().join(SETTINGS_FILENAME), "{oops").unwrap();
        let err = Settings::load(&StdFileSystem, &home).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_default_api_key_envs() {
        assert_eq!(
            Settings::default().api_key_envs(),
            vec!["GEMINI_API_KEY".to_string(), "API_KEY".to_string()]
        );
    }
}
