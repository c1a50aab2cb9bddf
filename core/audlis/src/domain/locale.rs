//! 合成時のロケール
//!
//! ロケールはエントリの妥当性には影響せず、モデルへの指示文と
//! フォールバック・既定の文言の選択にだけ使う。

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// "en" / "zh"（大文字小文字・"zh-CN" のような地域付きも受け付ける）
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let primary = lower.split(|c: char| c == '-' || c == '_').next().unwrap_or("");
        match primary {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// モデルに渡す指示文
    pub fn system_instruction(&self) -> &'static str {
        match self {
            Self::En => "As the Chief Knowledge Architect for Audlis.com, transform this unstructured transcript into a high-value, structured intelligence asset.",
            Self::Zh => "你是一位 Audlis.com 的首席知识架构师。你的任务是将这段非结构化的语音转录稿转化为极高价值的结构化情报资产。",
        }
    }

    /// タイトルが得られなかったときの表示名
    pub fn placeholder_title(&self) -> &'static str {
        match self {
            Self::En => "Audlis.com Asset",
            Self::Zh => "Audlis.com 资产",
        }
    }

    /// 音声認識の代わりに使うデモ用の転写文
    pub fn demo_transcript(&self) -> &'static str {
        match self {
            Self::En => "Strategic synthesis: \"Accelerate deep-learning integration to optimize core asset indexing by 40%.\"",
            Self::Zh => "战略合成：“加速深度学习集成，以优化 40% 的核心资产索引。”",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = serde_json::Value::deserialize(deserializer)?;
        Ok(v.as_str().and_then(Locale::parse).unwrap_or_default())
    }
}
