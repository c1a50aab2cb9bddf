//! 標準出力向けの整形（副作用なし。main が println する）

use crate::domain::analytics::Dashboard;
use crate::domain::KnowledgeEntry;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const TITLE_WIDTH: usize = 48;
/// 活動グリッドの濃さ（0, ~25%, ~50%, ~75%, 100%）
const SHADES: [char; 5] = ['·', '░', '▒', '▓', '█'];
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// epoch ミリ秒を "YYYY-MM-DD HH:MM" (UTC) にする
pub fn format_timestamp(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let head: String = s.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", head)
}

/// 1 件の詳細表示
pub fn render_entry(entry: &KnowledgeEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", entry.title);
    let _ = writeln!(
        out,
        "  id: {}  created: {}  category: {}  value: {}  lang: {}",
        entry.id,
        format_timestamp(entry.created_at),
        entry.category,
        entry.value_score.get(),
        entry.source_language
    );
    if !entry.tags.is_empty() {
        let _ = writeln!(out, "  tags: {}", entry.tags.join(", "));
    }
    if !entry.summary.is_empty() {
        let _ = writeln!(out, "  summary: {}", entry.summary);
    }
    for item in &entry.action_items {
        let _ = writeln!(out, "  - [ ] {}", item);
    }
    out
}

/// 一覧表示（新しい順のまま）
pub fn render_list(entries: &[KnowledgeEntry]) -> String {
    if entries.is_empty() {
        return "(no entries)\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:10} {:16} {:<10} {:>5}  {}",
        "ID", "CREATED", "CATEGORY", "VALUE", "TITLE"
    );
    for e in entries {
        let _ = writeln!(
            out,
            "{:10} {:16} {:<10} {:>5}  {}",
            e.id.as_str(),
            format_timestamp(e.created_at),
            e.category.as_str(),
            e.value_score.get(),
            truncate(&e.title, TITLE_WIDTH)
        );
    }
    out
}

fn shade(intensity: f32) -> char {
    if intensity <= 0.0 {
        return SHADES[0];
    }
    let idx = (intensity * (SHADES.len() - 1) as f32).ceil() as usize;
    SHADES[idx.clamp(1, SHADES.len() - 1)]
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "entries:          {}", dashboard.total);
    let _ = writeln!(out, "mean value score: {}", dashboard.mean_value_score);
    let _ = writeln!(out, "training entries: {}", dashboard.training_count);
    let _ = writeln!(out, "categories:");
    if dashboard.categories.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for c in &dashboard.categories {
        let _ = writeln!(out, "  {:<10} {}", c.category.as_str(), c.count);
    }
    let grid = &dashboard.activity;
    let _ = writeln!(
        out,
        "activity ({} weeks from {}, {} captures):",
        grid.weeks.len(),
        grid.start.format("%Y-%m-%d"),
        grid.total()
    );
    for (day, name) in WEEKDAYS.iter().enumerate() {
        let row: String = (0..grid.weeks.len())
            .map(|week| shade(grid.intensity(week, day)))
            .collect();
        let _ = writeln!(out, "  {} {}", name, row);
    }
    out
}
