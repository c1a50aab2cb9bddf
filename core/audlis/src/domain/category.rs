//! エントリの分類（閉じた 4 値）

use serde::{Deserialize, Deserializer, Serialize};

/// 分類。外部からの未知の値・欠損は `Operations` に正規化する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strategy,
    Training,
    #[default]
    Operations,
    Client,
}

impl Category {
    /// 集計・表示で使う固定順
    pub const ALL: [Category; 4] = [
        Category::Strategy,
        Category::Training,
        Category::Operations,
        Category::Client,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strategy" => Some(Self::Strategy),
            "training" => Some(Self::Training),
            "operations" => Some(Self::Operations),
            "client" => Some(Self::Client),
            _ => None,
        }
    }

    /// 未知の値は Operations
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Training => "training",
            Self::Operations => "operations",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = serde_json::Value::deserialize(deserializer)?;
        Ok(v.as_str().map(Category::parse_or_default).unwrap_or_default())
    }
}
