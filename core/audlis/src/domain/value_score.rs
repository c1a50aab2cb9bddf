//! 重要度スコア（0〜100 の整数）
//!
//! 外部から来た値は範囲外でも非整数でも、必ずここで丸めて範囲に収めてから保持する。

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ValueScore(u8);

impl ValueScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    /// 合成結果にスコアが無かったとき
    pub const SYNTHESIZED_DEFAULT: ValueScore = ValueScore(70);
    /// 合成そのものが失敗したとき
    pub const FALLBACK: ValueScore = ValueScore(50);

    pub fn clamped(n: i64) -> Self {
        Self(n.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// 四捨五入してから範囲に収める。NaN は None。
    pub fn from_f64(f: f64) -> Option<Self> {
        if f.is_nan() {
            return None;
        }
        let clamped = f.round().clamp(Self::MIN as f64, Self::MAX as f64);
        Some(Self(clamped as u8))
    }

    /// JSON 値からの変換。数値・先頭が数値の文字列（"85", "85%", "85/100"）を受け付ける。
    pub fn from_json(v: &Value) -> Option<Self> {
        match v {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Self::clamped(i)),
                None => n.as_f64().and_then(Self::from_f64),
            },
            Value::String(s) => leading_number(s).and_then(Self::from_f64),
            _ => None,
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for ValueScore {
    fn default() -> Self {
        Self::SYNTHESIZED_DEFAULT
    }
}

impl std::fmt::Display for ValueScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for ValueScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&v).unwrap_or_default())
    }
}

fn leading_number(s: &str) -> Option<f64> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = RE
        .get_or_init(|| Regex::new(r"^\s*([+-]?\d+(?:\.\d+)?)").ok())
        .as_ref()?;
    re.captures(s)?.get(1)?.as_str().parse().ok()
}
