//! 転写文 → 構造化ドラフト
//!
//! 外部モデルの応答は型なしの JSON として扱い、ここで検証しながら復号する。
//! 欠けた・不正なフィールドは決まった既定値に置き換える。

use crate::domain::{Category, Locale, ValueScore};
use common::error::Error;
use serde_json::{Map, Value};

/// フォールバック時に要約として残す転写文の先頭文字数
pub const FALLBACK_SUMMARY_CHARS: usize = 150;

/// 索引付けできなかったことを示すタグ
pub const UNINDEXED_TAG: &str = "unindexed";

/// モデルに要求するフィールド名（wire 上の名前）
pub const SCHEMA_FIELDS: [&str; 6] = [
    "title",
    "summary",
    "tags",
    "type",
    "valueScore",
    "actionItems",
];

/// 合成リクエスト（指示文 + 転写文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub locale: Locale,
    pub transcript: String,
}

impl SynthesisRequest {
    pub fn new(transcript: impl Into<String>, locale: Locale) -> Self {
        Self {
            locale,
            transcript: transcript.into(),
        }
    }

    /// モデルに送る本文
    pub fn prompt(&self) -> String {
        format!(
            "{}\n\nTranscript: \"{}\"",
            self.locale.system_instruction(),
            self.transcript
        )
    }
}

/// エントリの部分（ID・時刻・原文以外）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisDraft {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub category: Category,
    pub value_score: ValueScore,
    pub action_items: Vec<String>,
}

impl SynthesisDraft {
    /// 空オブジェクトを受け取ったときの値
    pub fn defaults(locale: Locale) -> Self {
        Self {
            title: locale.placeholder_title().to_string(),
            summary: String::new(),
            tags: Vec::new(),
            category: Category::default(),
            value_score: ValueScore::SYNTHESIZED_DEFAULT,
            action_items: Vec::new(),
        }
    }

    /// 合成が失敗したときの値（同じ入力なら常に同じ結果）
    pub fn fallback(transcript: &str, locale: Locale) -> Self {
        Self {
            title: locale.placeholder_title().to_string(),
            summary: transcript.chars().take(FALLBACK_SUMMARY_CHARS).collect(),
            tags: vec![UNINDEXED_TAG.to_string()],
            category: Category::Operations,
            value_score: ValueScore::FALLBACK,
            action_items: Vec::new(),
        }
    }

    /// モデル応答のテキストを復号する。
    ///
    /// JSON として読めない、またはトップレベルがオブジェクトでなければ Err。
    /// オブジェクトであれば各フィールドは個別に既定値へ落とす。
    pub fn decode(text: &str, locale: Locale) -> Result<Self, Error> {
        let body = strip_code_fence(text);
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::json(format!("Failed to parse synthesis response: {}", e)))?;
        let obj = value
            .as_object()
            .ok_or_else(|| Error::json("Synthesis response is not a JSON object"))?;
        Ok(Self::from_object(obj, locale))
    }

    fn from_object(obj: &Map<String, Value>, locale: Locale) -> Self {
        let defaults = Self::defaults(locale);
        let title = obj
            .get("title")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.title);
        let summary = obj
            .get("summary")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.summary);
        let category = obj
            .get("type")
            .or_else(|| obj.get("category"))
            .and_then(Value::as_str)
            .map(Category::parse_or_default)
            .unwrap_or(defaults.category);
        let value_score = obj
            .get("valueScore")
            .and_then(ValueScore::from_json)
            .unwrap_or(defaults.value_score);

        let mut tags: Vec<String> = Vec::new();
        for tag in string_items(obj.get("tags")) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self {
            title,
            summary,
            tags,
            category,
            value_score,
            action_items: string_items(obj.get("actionItems")),
        }
    }
}

/// 配列中の文字列だけを trim して取り出す（空文字は捨てる）
fn string_items(v: Option<&Value>) -> Vec<String> {
    v.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// ```json ... ``` で囲まれていれば中身だけを返す
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
