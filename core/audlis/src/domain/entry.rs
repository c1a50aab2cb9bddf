//! ナレッジエントリ（保存単位）
//!
//! 生成は取り込み時の 1 回だけで、その後は変更しない。
//! 参照側（集計・表示）には読み取り専用のビューとして渡す。

use crate::domain::{Category, Locale, SynthesisDraft, ValueScore};
use common::domain::RecordId;
use serde::{Deserialize, Serialize};

/// ナレッジエントリ
///
/// 旧 Web 版の保存形式（`timestamp` / `content` / `type` / `language`）も読み込める。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: RecordId,
    /// 取り込み時刻（Unix epoch ミリ秒）
    #[serde(alias = "timestamp")]
    pub created_at: u64,
    #[serde(default)]
    pub title: String,
    /// 元の転写文（監査・再処理のためそのまま保持）
    #[serde(alias = "content", default)]
    pub raw_content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(alias = "type", default)]
    pub category: Category,
    #[serde(default)]
    pub value_score: ValueScore,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(alias = "language", default)]
    pub source_language: Locale,
}

impl KnowledgeEntry {
    /// 合成結果からエントリを組み立てる。ID と時刻は呼び出し側が割り当てる。
    pub fn from_draft(
        id: RecordId,
        created_at: u64,
        raw_content: impl Into<String>,
        draft: SynthesisDraft,
        source_language: Locale,
    ) -> Self {
        Self {
            id,
            created_at,
            title: draft.title,
            raw_content: raw_content.into(),
            summary: draft.summary,
            tags: draft.tags,
            category: draft.category,
            value_score: draft.value_score,
            action_items: draft.action_items,
            source_language,
        }
    }

    /// 読み込み後の補正（空タイトルはロケールの既定名にする）
    pub fn normalized(mut self) -> Self {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            self.title = self.source_language.placeholder_title().to_string();
        } else if trimmed.len() != self.title.len() {
            self.title = trimmed.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> KnowledgeEntry {
        KnowledgeEntry {
            id: RecordId::new("0abcDEF1"),
            created_at: 1_767_225_600_000,
            title: "Q1 Strategic Alignment".to_string(),
            raw_content: "Focus on scaling.".to_string(),
            summary: "Scale.".to_string(),
            tags: vec!["strategy".to_string(), "AI".to_string()],
            category: Category::Strategy,
            value_score: ValueScore::clamped(94),
            action_items: vec!["Develop global roadmap".to_string()],
            source_language: Locale::En,
        }
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["createdAt"], json!(1_767_225_600_000u64));
        assert_eq!(v["rawContent"], json!("Focus on scaling."));
        assert_eq!(v["valueScore"], json!(94));
        assert_eq!(v["actionItems"], json!(["Develop global roadmap"]));
        assert_eq!(v["sourceLanguage"], json!("en"));
        assert_eq!(v["category"], json!("strategy"));
    }

    #[test]
    fn test_round_trip_is_identical() {
        let e = sample();
        let s = serde_json::to_string(&e).unwrap();
        let back: KnowledgeEntry = serde_json::from_str(&s).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_reads_legacy_web_record() {
        let legacy = json!({
            "id": "1",
            "timestamp": 1_700_000_000_000u64,
            "title": "核心产品技术架构研讨",
            "content": "Moving towards a decentralized knowledge index.",
            "summary": "…",
            "tags": ["tech"],
            "type": "operations",
            "valueScore": 88,
            "actionItems": [],
            "language": "zh"
        });
        let e: KnowledgeEntry = serde_json::from_value(legacy).unwrap();
        assert_eq!(e.id.as_str(), "1");
        assert_eq!(e.created_at, 1_700_000_000_000);
        assert_eq!(e.raw_content, "Moving towards a decentralized knowledge index.");
        assert_eq!(e.category, Category::Operations);
        assert_eq!(e.source_language, Locale::Zh);
    }

    #[test]
    fn test_invalid_fields_are_coerced_on_load() {
        let raw = json!({
            "id": "x",
            "createdAt": 1,
            "title": "  ",
            "category": "finance",
            "valueScore": 170.4,
            "sourceLanguage": "en"
        });
        let e: KnowledgeEntry = serde_json::from_value::<KnowledgeEntry>(raw).unwrap().normalized();
        assert_eq!(e.category, Category::Operations);
        assert_eq!(e.value_score.get(), 100);
        assert_eq!(e.title, "Audlis.com Asset");
        assert!(e.tags.is_empty());
        assert_eq!(e.summary, "");
    }
}
