//! 初回起動用のサンプルエントリ
//!
//! 保存データが無い（または少なすぎる）ときだけ使う。

use crate::domain::{Category, KnowledgeEntry, Locale, ValueScore};
use common::domain::RecordId;

const HOUR_MS: u64 = 3_600_000;
const DAY_MS: u64 = 86_400_000;

/// `now_ms` を基準にしたサンプル 3 件（新しい順）
pub fn seed_entries(locale: Locale, now_ms: u64) -> Vec<KnowledgeEntry> {
    let zh = locale == Locale::Zh;
    let pick = |en: &str, zh_text: &str| if zh { zh_text.to_string() } else { en.to_string() };
    let pick_all = |en: &[&str], zh_items: &[&str]| -> Vec<String> {
        let items = if zh { zh_items } else { en };
        items.iter().map(|s| s.to_string()).collect()
    };
    let tags = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        KnowledgeEntry {
            id: RecordId::new("1"),
            created_at: now_ms.saturating_sub(2 * HOUR_MS),
            title: pick("Q1 Strategic Alignment", "Q1 季度战略对齐会议"),
            raw_content: "Focus on scaling global operations and integrating AI nodes.".to_string(),
            summary: pick(
                "Established AI-driven global expansion strategy, focusing on HR optimization and automated workflows.",
                "确立了以 AI 驱动的全球化扩张战略，重点优化人力资源配置与自动化流程。",
            ),
            tags: tags(&["strategy", "global", "AI"]),
            category: Category::Strategy,
            value_score: ValueScore::clamped(94),
            action_items: pick_all(
                &["Develop global roadmap", "Initiate AI node integration"],
                &["制定全球化路线图", "启动 AI 节点集成计划"],
            ),
            source_language: locale,
        },
        KnowledgeEntry {
            id: RecordId::new("2"),
            created_at: now_ms.saturating_sub(DAY_MS),
            title: pick("Core Architecture Review", "核心产品技术架构研讨"),
            raw_content: "Moving towards a decentralized knowledge index.".to_string(),
            summary: pick(
                "In-depth review of decentralized knowledge index architecture, ensuring sync stability under high loads.",
                "针对分布式知识索引架构进行深度评审，确保高并发下的资产同步稳定性。",
            ),
            tags: tags(&["tech", "architecture", "stability"]),
            category: Category::Operations,
            value_score: ValueScore::clamped(88),
            action_items: pick_all(
                &["Optimize DB sharding", "Upgrade edge sync nodes"],
                &["优化数据库分片方案", "升级边缘同步节点"],
            ),
            source_language: locale,
        },
        KnowledgeEntry {
            id: RecordId::new("3"),
            created_at: now_ms.saturating_sub(3 * DAY_MS),
            title: pick("Customer Success Library", "客户成功案例库建设"),
            raw_content: "Building a shared repository for client wins.".to_string(),
            summary: pick(
                "Analyzed 50+ cases to extract key success factors into reproducible training modules.",
                "通过分析 50+ 真实案例，提炼出关键成功因素并转化为可复制的培训模组。",
            ),
            tags: tags(&["client", "training", "success"]),
            category: Category::Training,
            value_score: ValueScore::clamped(91),
            action_items: pick_all(
                &["Publish success whitepaper", "Organize cross-dept training"],
                &["发布成功案例白皮书", "组织跨部门培训营"],
            ),
            source_language: locale,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_newest_first_with_unique_ids() {
        let seeds = seed_entries(Locale::En, 1_767_614_400_000);
        assert_eq!(seeds.len(), 3);
        assert!(seeds.windows(2).all(|w| w[0].created_at > w[1].created_at));
        let mut ids: Vec<_> = seeds.iter().map(|e| e.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_seed_text_follows_locale() {
        let zh = seed_entries(Locale::Zh, 1_767_614_400_000);
        assert_eq!(zh[0].title, "Q1 季度战略对齐会议");
        assert_eq!(zh[0].source_language, Locale::Zh);
        let en = seed_entries(Locale::En, 1_767_614_400_000);
        assert_eq!(en[2].action_items[0], "Publish success whitepaper");
    }
}
